use anyhow::{bail, Result};
use btcpay_core::{Merchant, Platform};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use workflow::{view, Field, PaymentWorkflow, WorkflowState};

const CLEAR: &str = "-";

/// Line-oriented front-end: prompts for the form, shows the invoice and
/// offers the pay / reset actions.
pub struct Terminal<R, W> {
    input: Lines<R>,
    output: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.lines(),
            output,
        }
    }

    pub async fn run(&mut self, workflow: &mut PaymentWorkflow, merchant: Option<Merchant>) -> Result<()> {
        writeln!(self.output, "{}", view::header(merchant))?;
        writeln!(self.output)?;

        loop {
            if workflow.state().is_editable() {
                if let Some(message) = workflow.state().error() {
                    writeln!(self.output, "Error: {message}")?;
                }
                if !self.edit_form(workflow).await? {
                    break;
                }
                writeln!(self.output, "{}", view::SUBMITTING_LABEL)?;
                self.output.flush()?;
                workflow.submit().await;
                continue;
            }

            match workflow.state() {
                WorkflowState::Display(_) => {
                    self.print(&view::render(workflow.state()))?;
                    self.prompt(&format!(
                        "[p] {}  [n] {}  [q] Quit > ",
                        view::PAY_ACTION,
                        view::RESET_ACTION
                    ))?;
                    let Some(choice) = self.read_line().await? else {
                        break;
                    };
                    match choice.trim().to_ascii_lowercase().as_str() {
                        "p" => match workflow.pay() {
                            Ok(true) => writeln!(self.output, "Opening payment page...")?,
                            Ok(false) => writeln!(self.output, "This invoice has no payment link.")?,
                            Err(err) => {
                                tracing::warn!(error = %err, "Failed to open payment page");
                                writeln!(self.output, "Could not open the payment page: {err}")?
                            }
                        },
                        "n" => workflow.reset(),
                        "q" => break,
                        other => writeln!(self.output, "Unknown choice: {other}")?,
                    }
                }
                _ => bail!("submission did not settle"),
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", view::FOOTER)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompts every field once. `false` when input ran out.
    async fn edit_form(&mut self, workflow: &mut PaymentWorkflow) -> Result<bool> {
        writeln!(
            self.output,
            "Press Enter to keep a value, '{CLEAR}' to clear it."
        )?;
        for field in Field::ALL {
            let current = workflow
                .state()
                .form()
                .map(|form| form.get(field).to_string())
                .unwrap_or_default();

            match field {
                Field::Currency => writeln!(self.output, "  (USD, EUR, BTC)")?,
                Field::ProductId => self.print(&view::platform_options())?,
                _ => {}
            }
            let marker = if field.is_required() { "*" } else { "" };
            self.prompt(&format!("{}{marker} [{current}]: ", field.label()))?;

            let Some(line) = self.read_line().await? else {
                return Ok(false);
            };
            let value = match line.trim() {
                "" => continue,
                CLEAR => String::new(),
                choice if field == Field::ProductId => platform_choice(choice),
                _ => line.clone(),
            };
            workflow.update(field, value);
        }
        Ok(true)
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.next_line().await?)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn print(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

/// Accepts a platform by its list number as well as by name.
fn platform_choice(input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Platform::ALL.get(i))
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| input.to_string())
}
