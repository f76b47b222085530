use super::messages::Message;
use super::pair::Pair;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn pairs(pairs: &[Pair]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "LOCAL", "REMOTE"]);
        for pair in pairs {
            table.add_row(row![pair.name, pair.local, pair.remote]);
        }
        table.printstd();
    }

    pub fn pair(pair: &Pair) {
        println!();
        println!("{}: {}", Message::PairNameLabel, pair.name);
        println!("{}: {}", Message::PairLocalLabel, pair.local);
        println!("{}: {}", Message::PairRemoteLabel, pair.remote);
        println!();
    }
}
