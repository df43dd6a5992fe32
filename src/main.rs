//! rExpense main entrypoint.

use rexpense::run;
use rexpense::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
