//! The individual steps of the smoke-check script. Each step writes its own
//! lines to the console and returns whatever value it computed.

use crate::core::{Console, Person, Result};
use crate::domain::model::{self, CLOSING_BANNER, OPENING_BANNER};

pub fn opening_banner<C: Console>(console: &mut C) -> Result<()> {
    console.write_line(OPENING_BANNER)
}

pub fn print_sum<C: Console>(console: &mut C, lhs: i64, rhs: i64) -> Result<i64> {
    let sum = model::add(lhs, rhs)?;
    console.log(&[&"数字计算:", &lhs, &"+", &rhs, &"=", &sum])?;
    Ok(sum)
}

pub fn print_greeting<C: Console>(console: &mut C, name: &str) -> Result<String> {
    let message = model::greeting(name);
    console.log(&[&"字符串操作:", &message])?;
    Ok(message)
}

/// Traces its operands before returning the product.
pub fn multiply<C: Console>(console: &mut C, lhs: i64, rhs: i64) -> Result<i64> {
    console.log(&[&"正在计算", &lhs, &"×", &rhs])?;
    model::product(lhs, rhs)
}

pub fn print_product<C: Console>(console: &mut C, lhs: i64, rhs: i64) -> Result<i64> {
    let result = multiply(console, lhs, rhs)?;
    console.log(&[&"函数返回结果:", &result])?;
    Ok(result)
}

pub fn print_introduction<C: Console>(console: &mut C, person: &Person) -> Result<String> {
    let sentence = person.greet();
    console.log(&[&"对象测试:", &sentence])?;
    Ok(sentence)
}

pub fn closing_banner<C: Console>(console: &mut C) -> Result<()> {
    console.write_line(CLOSING_BANNER)
}
