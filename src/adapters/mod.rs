// Adapters layer: concrete consoles the script can write to.

pub mod console;
