use super::utils::seeded_repository;
use anyhow::Result;
use showcase_interaction::render_system_instruction;

pub fn print() -> Result<()> {
    let instruction = render_system_instruction(&seeded_repository().list_all())?;
    println!("{}", instruction.trim());
    Ok(())
}
