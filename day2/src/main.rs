use day2::order_totals;
use util::{measure, read_input_lines};

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let totals = measure(|| order_totals(read_input_lines()));

    println!("{totals}");

    Ok(())
}
