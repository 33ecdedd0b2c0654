//! The interactive menu loop.
//!
//! One operation per menu choice, one at a time. Values are validated here
//! before they reach the inventory; the inventory's own errors are printed
//! verbatim.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use inventrent_core::ItemId;
use inventrent_inventory::{Inventory, NewItem};

use crate::console::Console;
use crate::input::{parse_float, parse_int, parse_stock_with_unit};
use crate::menu::{MenuChoice, SearchBy, menu_text};
use crate::render;

const NOT_FOUND: &str = "Item not found.";

/// Why the session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose "Exit".
    Exit,
    /// Input closed; treated like Exit by the caller.
    EndOfInput,
}

/// Outcome of one menu action.
enum Step {
    Continue,
    End(SessionEnd),
}

/// Menu session over an owned inventory.
pub struct Session<'c, R, W> {
    inventory: Inventory,
    console: &'c mut Console<R, W>,
}

impl<'c, R, W> Session<'c, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(inventory: Inventory, console: &'c mut Console<R, W>) -> Self {
        Self { inventory, console }
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            if let Step::End(end) = self.step()? {
                tracing::debug!(?end, dirty = self.inventory.is_dirty(), "session finished");
                return Ok(end);
            }
        }
    }

    fn step(&mut self) -> io::Result<Step> {
        self.console.say(menu_text())?;
        let Some(raw) = self.console.ask("Enter your choice: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };

        let Some(number) = parse_int(&raw) else {
            self.warn("Invalid input. Please enter a number between 1 and 8.")?;
            return Ok(Step::Continue);
        };

        match MenuChoice::from_number(number) {
            Some(MenuChoice::AddItem) => self.add_item(),
            Some(MenuChoice::UpdateStock) => self.update_stock(),
            Some(MenuChoice::DeleteItem) => self.delete_item(),
            Some(MenuChoice::SearchItem) => self.search_item(),
            Some(MenuChoice::DisplayInventory) => {
                if !self.inventory.is_empty() {
                    self.console.say(render::inventory_listing(&self.inventory))?;
                }
                Ok(Step::Continue)
            }
            Some(MenuChoice::CheckLowStock) => {
                self.console.say(render::low_stock_alerts(&self.inventory))?;
                Ok(Step::Continue)
            }
            Some(MenuChoice::GenerateSummary) => {
                self.console.say(render::summary(&self.inventory))?;
                Ok(Step::Continue)
            }
            Some(MenuChoice::Exit) => Ok(Step::End(SessionEnd::Exit)),
            None => {
                self.warn("Invalid choice. Please try again.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_item(&mut self) -> io::Result<Step> {
        let Some(raw) = self.console.ask("Enter Item ID: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(id) = parse_int(&raw) else {
            return self.reject("Invalid Item ID. It should be an integer.");
        };

        let Some(name) = self.console.ask("Enter Item Name: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };

        let Some(raw) = self.console.ask("Enter Stock (with unit, e.g., '50 kg'): ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some((stock, unit)) = parse_stock_with_unit(&raw) else {
            return self.reject(
                "Invalid stock input. Ensure you enter the stock followed by the unit (e.g., '50 kg').",
            );
        };

        let Some(raw) = self.console.ask(&format!("Enter Price per {unit}: "))? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(price) = parse_float(&raw) else {
            return self.reject("Invalid price. It should be a number.");
        };

        let Some(supplier) = self.console.ask("Enter Supplier Information: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };

        let Some(raw) = self.console.ask("Enter Low Stock Threshold: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(low_stock_threshold) = parse_int(&raw) else {
            return self.reject("Invalid low stock threshold. It should be an integer.");
        };

        let outcome = self
            .inventory
            .add(NewItem {
                id,
                name,
                stock,
                unit,
                price,
                supplier,
                low_stock_threshold,
            })
            .map(|_| ());
        match outcome {
            Ok(_) => self.console.say("Item added to the inventory.".green())?,
            Err(err) => self.warn(&err.to_string())?,
        }
        Ok(Step::Continue)
    }

    fn update_stock(&mut self) -> io::Result<Step> {
        const INVALID: &str = "Invalid input. Item ID and new stock value should be integers.";

        let Some(raw) = self.console.ask("Enter Item ID to update stock: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(id) = parse_int(&raw) else {
            return self.reject(INVALID);
        };
        let Some(raw) = self.console.ask("Enter new stock value: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(new_stock) = parse_int(&raw) else {
            return self.reject(INVALID);
        };

        // A non-positive id cannot be stored, so it is simply not found.
        let updated = ItemId::new(id)
            .and_then(|id| self.inventory.update_stock(id, new_stock))
            .is_ok();
        if updated {
            self.console.say("Stock updated.".green())?;
        } else {
            self.warn(NOT_FOUND)?;
        }
        Ok(Step::Continue)
    }

    fn delete_item(&mut self) -> io::Result<Step> {
        let Some(raw) = self.console.ask("Enter Item ID to delete: ")? else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(id) = parse_int(&raw) else {
            return self.reject("Invalid Item ID. It should be an integer.");
        };

        match ItemId::new(id).and_then(|id| self.inventory.delete(id)) {
            Ok(_) => self.console.say("Item deleted from the inventory.".green())?,
            Err(_) => self.warn(NOT_FOUND)?,
        }
        Ok(Step::Continue)
    }

    fn search_item(&mut self) -> io::Result<Step> {
        let Some(raw) = self
            .console
            .ask("Search by:\n1. Item ID\n2. Item Name\nEnter your choice: ")?
        else {
            return Ok(Step::End(SessionEnd::EndOfInput));
        };
        let Some(number) = parse_int(&raw) else {
            return self.reject("Invalid choice. Please enter 1 or 2.");
        };

        let found = match SearchBy::from_number(number) {
            Some(SearchBy::Id) => {
                let Some(raw) = self.console.ask("Enter Item ID to search: ")? else {
                    return Ok(Step::End(SessionEnd::EndOfInput));
                };
                let Some(id) = parse_int(&raw) else {
                    return self.reject("Invalid Item ID. It should be an integer.");
                };
                match ItemId::new(id) {
                    Ok(id) => self.inventory.find_by_id(id),
                    Err(_) => None,
                }
            }
            Some(SearchBy::Name) => {
                let Some(name) = self.console.ask("Enter Item Name to search: ")? else {
                    return Ok(Step::End(SessionEnd::EndOfInput));
                };
                self.inventory.find_by_name(&name)
            }
            None => return self.reject("Invalid choice. Please try again."),
        };

        match found {
            Some(item) => {
                let card = render::item_card(item);
                self.console.say("Item found:")?;
                self.console.say(card)?;
            }
            None => self.warn(NOT_FOUND)?,
        }
        Ok(Step::Continue)
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        self.console.say(message.red())
    }

    fn reject(&mut self, message: &str) -> io::Result<Step> {
        self.warn(message)?;
        Ok(Step::Continue)
    }
}
