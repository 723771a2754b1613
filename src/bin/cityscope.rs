use anyhow::Result;
use cityscope::cli::{actions, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    actions::probe::handle(action, &globals).await?;

    Ok(())
}
