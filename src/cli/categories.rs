use crate::error::Result;
use crate::models::Category;

pub fn run() -> Result<()> {
    for (i, c) in Category::ALL.iter().enumerate() {
        println!("{}. {c}", i + 1);
    }
    Ok(())
}
