use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::input;
use crate::table::Table;
use crate::utils::path::{expand_tilde, is_stdin};
use std::fs::File;
use std::io::{self, BufReader, Read};

/// Handle the `render` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        input: format,
        margin,
        no_split_line,
        empty_text,
        widths,
        formats,
        columns,
    } = cmd
    {
        let mut table = Table::new();
        cfg.apply(&mut table);

        // command line wins over the config file
        if let Some(m) = margin {
            table.margin = *m;
        }
        if *no_split_line {
            table.split_line = false;
        }
        if let Some(text) = empty_text {
            table.empty_text = text.clone();
        }

        let input_format = (*format).unwrap_or(cfg.default_input);
        let columns = columns.as_deref().map(split_list);
        let records = input::read(input_format, open(file.as_deref())?, columns.as_deref())?;

        table.set_headers(records.headers().iter().cloned());
        if let Some(w) = widths {
            table.set_widths(&parse_widths(w)?)?;
        }
        if let Some(f) = formats {
            table.set_formats(split_list(f))?;
        }
        records.fill(&mut table)?;

        table.print()?;
    }
    Ok(())
}

fn open(file: Option<&str>) -> AppResult<Box<dyn Read>> {
    if is_stdin(file) {
        return Ok(Box::new(io::stdin()));
    }
    let path = expand_tilde(file.unwrap_or_default());
    log::debug!("reading {}", path.display());
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse `10,,5` into `[10, 0, 5]`.
pub fn parse_widths(list: &str) -> AppResult<Vec<usize>> {
    list.split(',')
        .map(str::trim)
        .map(|w| {
            if w.is_empty() {
                Ok(0)
            } else {
                w.parse::<usize>().map_err(|_| {
                    AppError::InvalidConfiguration(format!("width is not an integer: {w}"))
                })
            }
        })
        .collect()
}
