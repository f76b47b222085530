use crate::libs::messages::Message;
use crate::libs::pair::PairStore;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(store: &PairStore) -> Result<()> {
    if store.is_empty() {
        msg_info!(Message::NoPairsFound);
        return Ok(());
    }

    msg_print!(Message::PairListHeader, true);
    View::pairs(&store.list());
    Ok(())
}
