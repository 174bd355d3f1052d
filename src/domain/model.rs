use crate::utils::error::{Result, ScriptError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUM_LHS: i64 = 10;
pub const DEFAULT_SUM_RHS: i64 = 20;
pub const DEFAULT_GREETING_NAME: &str = "尹明华";
pub const DEFAULT_MULTIPLY_LHS: i64 = 6;
pub const DEFAULT_MULTIPLY_RHS: i64 = 7;
pub const DEFAULT_PERSON_NAME: &str = "张三";
pub const DEFAULT_PERSON_AGE: u32 = 25;

pub const OPENING_BANNER: &str = "=== JavaScript 综合测试开始 ===";
pub const CLOSING_BANNER: &str = "=== 测试完成 ===";
pub const COMPLETION_MESSAGE: &str = "所有测试都通过了！";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn greet(&self) -> String {
        format!("我叫{}，今年{}岁", self.name, self.age)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new(DEFAULT_PERSON_NAME, DEFAULT_PERSON_AGE)
    }
}

pub fn add(lhs: i64, rhs: i64) -> Result<i64> {
    lhs.checked_add(rhs)
        .ok_or(ScriptError::ArithmeticOverflow {
            operation: "+",
            lhs,
            rhs,
        })
}

pub fn product(lhs: i64, rhs: i64) -> Result<i64> {
    lhs.checked_mul(rhs)
        .ok_or(ScriptError::ArithmeticOverflow {
            operation: "×",
            lhs,
            rhs,
        })
}

pub fn greeting(name: &str) -> String {
    format!("你好，{}！", name)
}

/// Everything the script wrote, plus the value it finished with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub completion: String,
}
