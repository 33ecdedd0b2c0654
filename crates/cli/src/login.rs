//! Login gate run before the inventory is loaded.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use inventrent_auth::{CredentialCheck, Operator};

use crate::console::Console;
use crate::menu::BANNER;

/// Prompt until `check` accepts a username/password pair.
///
/// Returns `None` if input ends first.
pub fn login<C, R, W>(console: &mut Console<R, W>, check: &C) -> io::Result<Option<Operator>>
where
    C: CredentialCheck + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        console.say(BANNER)?;
        let Some(username) = console.ask("Enter username to login: ")? else {
            return Ok(None);
        };
        let Some(password) = console.ask("Enter password: ")? else {
            return Ok(None);
        };

        match check.verify(&username, &password) {
            Ok(operator) => {
                console.say("Login successful!".green())?;
                return Ok(Some(operator));
            }
            Err(err) => console.say(err.to_string().red())?,
        }
    }
}
