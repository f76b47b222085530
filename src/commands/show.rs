use crate::libs::pair::PairStore;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Name of the pair to show
    #[arg(required = true)]
    pub name: String,
}

pub fn cmd(args: ShowArgs, store: &PairStore) -> Result<()> {
    let pair = store.get(&args.name)?;
    View::pair(&pair);
    Ok(())
}
