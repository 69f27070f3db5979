//! Terminal front end: maps user commands to core operations and renders
//! the results. No business rules live here.

use std::io::{BufRead, Write};

use cafepos_core::PosResult;
use cafepos_ledger::RevenueLedger;
use cafepos_menu::{MenuEntry, MenuStore, Size};
use cafepos_orders::{OrderSession, OrderStore, PaymentMethod};

/// One user interaction, parsed from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Menu,
    Add { item: String, size: Option<Size> },
    Total,
    Finalize(PaymentMethod),
    New,
    History,
    Revenue,
    AddItem { name: String, price: u64 },
    RemoveItem(String),
    Help,
    Quit,
}

/// Parse a command line. `None` means unrecognized input (or a blank line).
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "menu" => Some(Command::Menu),
        "add" if !rest.is_empty() => {
            // A trailing size token belongs to the size, the rest to the
            // (possibly multi-word) item name.
            let mut tokens: Vec<&str> = rest.split_whitespace().collect();
            let size = tokens.last().and_then(|last| Size::parse(last));
            if size.is_some() {
                tokens.pop();
            }
            if tokens.is_empty() {
                return None;
            }
            Some(Command::Add {
                item: tokens.join(" "),
                size,
            })
        }
        "total" => Some(Command::Total),
        "finalize" => parse_payment(rest).map(Command::Finalize),
        "new" => Some(Command::New),
        "history" => Some(Command::History),
        "revenue" => Some(Command::Revenue),
        "additem" => {
            let mut tokens: Vec<&str> = rest.split_whitespace().collect();
            let price = tokens.pop()?.parse().ok()?;
            if tokens.is_empty() {
                return None;
            }
            Some(Command::AddItem {
                name: tokens.join(" "),
                price,
            })
        }
        "removeitem" if !rest.is_empty() => Some(Command::RemoveItem(rest.to_string())),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_payment(s: &str) -> Option<PaymentMethod> {
    match s.trim().to_lowercase().as_str() {
        "cash" => Some(PaymentMethod::Cash),
        "credit" => Some(PaymentMethod::CreditCard),
        "debit" => Some(PaymentMethod::DebitCard),
        "upi" => Some(PaymentMethod::Upi),
        _ => None,
    }
}

const HELP: &str = "\
commands:
  menu                     list menu items and prices
  add <item> [size]        order an item (size: small/medium/large)
  total                    show running and discounted totals
  finalize <method>        complete the order (cash/credit/debit/upi)
  new                      start a new order (clears the saved one)
  history                  show the last saved order
  revenue                  show accumulated revenue (admin)
  additem <name> <price>   add a flat-priced menu item (admin)
  removeitem <name>        remove a menu item (admin)
  quit";

/// Run the interactive loop until `quit` or end of input.
pub fn run<S, R, W>(
    mut session: OrderSession<S>,
    mut menu: MenuStore,
    input: R,
    mut out: W,
) -> PosResult<()>
where
    S: OrderStore,
    R: BufRead,
    W: Write,
{
    let mut ledger = RevenueLedger::new();

    match session.resume_from_store() {
        Ok(true) => {
            let _ = writeln!(
                out,
                "Welcome back! Your previous order total was ₨{}.",
                session.order().subtotal()
            );
        }
        Ok(false) => {}
        Err(err) => {
            let _ = writeln!(out, "could not resume saved order: {err}");
        }
    }
    let _ = writeln!(out, "Welcome to the cafe. Type `help` for commands.");

    for line in input.lines() {
        let line = line.map_err(|e| cafepos_core::PosError::storage(e.to_string()))?;
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                let _ = writeln!(out, "unrecognized command; try `help`");
            }
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                let _ = writeln!(out, "{HELP}");
            }
            Command::Menu => render_menu(&menu, &mut out),
            Command::Add { item, size } => match session.add_line(&menu, &item, size) {
                Ok(()) => {
                    let _ = writeln!(
                        out,
                        "added. running total: ₨{}",
                        session.order().subtotal()
                    );
                }
                Err(err) => {
                    let _ = writeln!(out, "{err}");
                }
            },
            Command::Total => {
                let (total, applied) = session.compute_discounted_total();
                let _ = writeln!(out, "subtotal: ₨{}", session.order().subtotal());
                if applied {
                    let _ = writeln!(out, "you have received a 40% discount!");
                }
                let _ = writeln!(out, "final total: ₨{total:.2}");
            }
            Command::Finalize(method) => match session.finalize(method, &mut ledger) {
                Ok(receipt) => {
                    for line in session.order().lines() {
                        let _ = writeln!(out, "- {line}");
                    }
                    let _ = writeln!(
                        out,
                        "final total ₨{:.2} paid by {}. thank you!",
                        receipt.total, receipt.payment_method
                    );
                }
                Err(err) => {
                    let _ = writeln!(out, "{err}");
                }
            },
            Command::New => match session.start_new() {
                Ok(()) => {
                    let _ = writeln!(out, "new order started! pick items from the menu.");
                }
                Err(err) => {
                    let _ = writeln!(out, "{err}");
                }
            },
            Command::History => render_history(&session, &mut out),
            Command::Revenue => {
                let _ = writeln!(out, "total revenue: ₨{:.2}", ledger.total());
            }
            Command::AddItem { name, price } => match menu.add_item(&name, price) {
                Ok(()) => {
                    let _ = writeln!(out, "item '{name}' added to menu.");
                }
                Err(err) => {
                    let _ = writeln!(out, "{err}");
                }
            },
            Command::RemoveItem(name) => match menu.remove_item(&name) {
                Ok(()) => {
                    let _ = writeln!(out, "item '{name}' removed from menu.");
                }
                Err(err) => {
                    let _ = writeln!(out, "{err}");
                }
            },
        }
    }

    Ok(())
}

fn render_menu<W: Write>(menu: &MenuStore, out: &mut W) {
    for name in menu.list_items() {
        match menu.entry(name) {
            Some(MenuEntry::Flat(price)) => {
                let _ = writeln!(out, "{name}: ₨{price}");
            }
            Some(MenuEntry::Sized(by_size)) => {
                let prices: Vec<String> = by_size
                    .iter()
                    .map(|(size, price)| format!("{} ₨{price}", size.label()))
                    .collect();
                let _ = writeln!(out, "{name}: {}", prices.join(", "));
            }
            None => {}
        }
    }
}

fn render_history<S: OrderStore, W: Write>(session: &OrderSession<S>, out: &mut W) {
    match session.store().load() {
        Ok(Some(order)) => {
            let _ = writeln!(out, "order total: ₨{}", order.subtotal());
            let items: Vec<&str> = order.lines().iter().map(|line| line.label()).collect();
            let _ = writeln!(out, "items ordered: {}", items.join(", "));
            let _ = writeln!(
                out,
                "order status: {}",
                if order.is_completed() { "Completed" } else { "Pending" }
            );
        }
        Ok(None) => {
            let _ = writeln!(out, "no previous orders found.");
        }
        Err(err) => {
            let _ = writeln!(out, "{err}");
        }
    }
}
