//! The selection loop itself.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::console::TokenReader;
use super::error::SelectionError;
use super::roster::Roster;
use crate::model::{Customer, CustomerId, Product, Upc};

/// Tokens that end the session (case-insensitive). At the product prompt a
/// matching UPC takes precedence.
const EXIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// Where the loop is waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingCustomer,
    AwaitingProduct { customer: CustomerId },
    Exit,
}

/// One confirmed customer/product pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub customer: CustomerId,
    pub upc: Upc,
}

/// What a finished session did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub selections: Vec<Selection>,
    pub format_errors: usize,
    pub lookup_misses: usize,
}

/// Drives the operator through customer then product selection until they quit.
///
/// Generic over the console so tests can script input with a `Cursor` and
/// capture output in a `Vec<u8>`.
pub struct SelectionWorkflow<R, W> {
    customers: Roster<Customer>,
    products: Roster<Product>,
    input: TokenReader<R>,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> SelectionWorkflow<R, W> {
    pub fn new(customers: Roster<Customer>, products: Roster<Product>, input: R, output: W) -> Self {
        Self {
            customers,
            products,
            input: TokenReader::new(input),
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Runs until the operator types an exit token or the input ends.
    pub fn run(mut self) -> Result<SessionSummary, SelectionError> {
        info!(
            customers = self.customers.len(),
            products = self.products.len(),
            "Selection session started"
        );
        writeln!(self.output)?;
        writeln!(self.output, "{}", "*".repeat(94))?;

        let mut state = SelectionState::AwaitingCustomer;
        loop {
            state = match state {
                SelectionState::AwaitingCustomer => self.await_customer()?,
                SelectionState::AwaitingProduct { customer } => self.await_product(customer)?,
                SelectionState::Exit => break,
            };
        }

        self.output.flush()?;
        info!(
            selections = self.summary.selections.len(),
            format_errors = self.summary.format_errors,
            lookup_misses = self.summary.lookup_misses,
            "Selection session ended"
        );
        Ok(self.summary)
    }

    fn await_customer(&mut self) -> Result<SelectionState, SelectionError> {
        for customer in self.customers.iter() {
            writeln!(self.output, "{customer}")?;
        }
        writeln!(self.output, "Enter your customer ID ('q' to quit):")?;

        let Some(token) = self.input.next_token()? else {
            return Ok(SelectionState::Exit);
        };
        if is_exit(&token) {
            return Ok(SelectionState::Exit);
        }

        match resolve_customer(&self.customers, &token) {
            Ok(customer) => {
                debug!(customer = %customer.id, "Customer selected");
                writeln!(self.output, "Hello {} {}.", customer.first_name, customer.last_name)?;
                Ok(SelectionState::AwaitingProduct { customer: customer.id })
            }
            Err(error) => {
                self.report(error)?;
                Ok(SelectionState::AwaitingCustomer)
            }
        }
    }

    fn await_product(&mut self, customer: CustomerId) -> Result<SelectionState, SelectionError> {
        for product in self.products.iter() {
            writeln!(self.output, "{product}")?;
        }
        writeln!(self.output, "Enter your product's UPC ('q' to quit):")?;

        let Some(token) = self.input.next_token()? else {
            return Ok(SelectionState::Exit);
        };

        // UPCs are free text, so a product named like an exit token still wins.
        let resolved = resolve_product(&self.products, &token);
        if resolved.is_err() && is_exit(&token) {
            return Ok(SelectionState::Exit);
        }

        match resolved {
            Ok(product) => {
                info!(%customer, upc = %product.upc, "Selection confirmed");
                writeln!(self.output, "Selected {} for customer {}.", product.description, customer)?;
                writeln!(self.output)?;
                self.summary.selections.push(Selection {
                    customer,
                    upc: product.upc.clone(),
                });
            }
            Err(error) => self.report(error)?,
        }
        Ok(SelectionState::AwaitingCustomer)
    }

    /// Counts and prints a recoverable error. I/O errors are passed back instead.
    fn report(&mut self, error: SelectionError) -> Result<(), SelectionError> {
        match &error {
            SelectionError::InputFormat { .. } => self.summary.format_errors += 1,
            SelectionError::LookupMiss { .. } => self.summary.lookup_misses += 1,
            SelectionError::Io(_) => return Err(error),
        }
        warn!(%error, "Selection rejected");
        writeln!(self.output, "{error}. Try again.")?;
        writeln!(self.output)?;
        Ok(())
    }
}

fn is_exit(token: &str) -> bool {
    EXIT_TOKENS.iter().any(|exit| token.eq_ignore_ascii_case(exit))
}

fn resolve_customer<'a>(roster: &'a Roster<Customer>, token: &str) -> Result<&'a Customer, SelectionError> {
    let id: i64 = token.parse().map_err(|_| SelectionError::InputFormat {
        token: token.to_string(),
    })?;
    u64::try_from(id)
        .ok()
        .and_then(|id| roster.get(&CustomerId(id)))
        .ok_or_else(|| SelectionError::LookupMiss {
            kind: "Customer",
            token: token.to_string(),
        })
}

fn resolve_product<'a>(roster: &'a Roster<Product>, token: &str) -> Result<&'a Product, SelectionError> {
    roster
        .get(&Upc::from(token))
        .ok_or_else(|| SelectionError::LookupMiss {
            kind: "Product",
            token: token.to_string(),
        })
}
