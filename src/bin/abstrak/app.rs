use std::io::{IsTerminal, Write};

use crate::{bootstrap::BootStrap, clap_app};
use abstrak::{
    chain::Chain,
    config::MainConfig,
    debug, log,
    reader::{Input, InputReader},
    transforms::{ChainOptions, Stage},
};
use clap::ArgMatches;
use nu_ansi_term::Color::{Green, Yellow};

use abstrak::error::*;

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Collects the option overrides supplied in the command line arguments
    fn build_overrides(&self) -> ChainOptions {
        let mut options = ChainOptions::new();
        if let Some(punctuation) = self.matches.get_one::<String>("punctuation") {
            options = options.punctuation(punctuation);
        }
        if let Some(special) = self.matches.get_one::<String>("special") {
            options = options.special_characters(special);
        }
        if self.matches.get_flag("keep-duplicate-whitespace") {
            options = options.collapse_whitespace(false);
        }
        options
    }

    /// Builds the chain to apply, either from explicit stages or from a named chain.
    /// When debugging is enabled an observer tracing every stage is attached.
    fn build_chain(&self, config: &MainConfig) -> Result<Chain> {
        let overrides = self.build_overrides();

        let chain = match self.matches.get_many::<String>("stage") {
            Some(stages) => {
                let stages: Vec<&String> = stages.collect();
                Chain::from_names("custom", &stages, &config.options().overlay(&overrides))?
            }
            None => config.build_chain(
                self.matches.get_one::<String>("chain").map(|s| s.as_str()),
                &overrides,
            )?,
        };
        debug!(
            "Using chain \"{}\" : {}",
            chain.chain_name(),
            chain.stage_names().join(" > ")
        );

        Ok(if log::is_debug_enabled() {
            chain.with_observer(|event| {
                debug!(
                    "  [{}] {} : {:?}",
                    event.index,
                    event.stage,
                    log::preview(event.output, 80)
                );
            })
        } else {
            chain
        })
    }

    /// Gathers the inputs from the positional texts, the input files or stdin
    ///
    /// # Errors
    /// Returns `InvalidInvocation` when no text is provided at all
    fn gather_inputs(&self) -> Result<Vec<Input>> {
        let mut inputs: Vec<Input> = self
            .matches
            .get_many::<String>("text")
            .map(|texts| texts.map(|t| Input::new("argument", t)).collect())
            .unwrap_or_default();

        if let Some(patterns) = self.matches.get_many::<String>("input") {
            let patterns: Vec<&String> = patterns.collect();
            inputs.extend(InputReader::read_patterns(&patterns)?);
        }

        if inputs.is_empty() {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(Error::InvalidInvocation(clap::crate_name!().to_string()));
            }
            inputs.push(InputReader::read_stream("stdin", stdin.lock())?);
        }
        Ok(inputs)
    }

    /// Cleans every record of every input and prints the results
    fn clean(&self, config: &MainConfig) -> Result<bool> {
        let chain = self.build_chain(config)?;
        let inputs = self.gather_inputs()?;
        let by_line = self.matches.get_flag("lines");

        let cleaned: Vec<String> = inputs
            .iter()
            .flat_map(|input| {
                debug!("Cleaning {}", input.source);
                input.records(by_line)
            })
            .map(|record| chain.process(Some(record)))
            .collect();

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if self.matches.get_flag("json") {
            writeln!(out, "{}", serde_json::to_string_pretty(&cleaned)?)?;
        } else {
            for record in &cleaned {
                writeln!(out, "{}", record)?;
            }
        }
        Ok(true)
    }

    fn list_stages(&self) -> Result<bool> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for stage in Stage::ALL {
            writeln!(
                out,
                "{} {}",
                Green.paint(format!("{:<28}", stage.as_str())),
                stage.description()
            )?;
        }
        Ok(true)
    }

    fn list_chains(&self, config: &MainConfig) -> Result<bool> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for name in config.chain_names() {
            let marker = if name == config.defaults.chain {
                " (default)"
            } else {
                ""
            };
            writeln!(out, "{}{}", Green.paint(name.as_str()), Yellow.paint(marker))?;
            for stage in config.chain_stages(&name)? {
                writeln!(out, "  - {}", stage)?;
            }
        }
        Ok(true)
    }

    /// Start the application, bootstraps the configuration and runs the requested command.
    ///
    /// # Returns
    /// A `Result` indicating whether the application ran successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;
        let config = bootstrap.get_config();

        match self.matches.subcommand() {
            Some(("stages", _)) => self.list_stages(),
            Some(("chains", _)) => self.list_chains(config),
            _ => self.clean(config),
        }
    }
}
