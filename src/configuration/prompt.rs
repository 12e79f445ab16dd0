//! Interactive acquisition of initial conditions from a console.
//!
//! Asks for the six values in order and range checks them as a set. Any
//! rejected answer restarts the whole questionnaire, in a loop, until a valid
//! set is given or the input ends.

use std::io::{BufRead, Write};

use log::debug;

use super::config::PendulumConfig;
use super::error::ConfigError;

/// Longest accepted answer, in characters
const MAX_ANSWER_LEN: usize = 6;

const PROMPTS: [&str; 6] = [
    "Mass of 1st pendulum (0<m<=10 kg): ",
    "Mass of 2nd pendulum (0<m<=10 kg): ",
    "Length of 1st pendulum (10<=l<=100 cm): ",
    "Length of 2nd pendulum (10<=l<=100 cm): ",
    "Initial angle of 1st pendulum (0<=a<=180 deg): ",
    "Initial angle of 2nd pendulum (0<=a<=180 deg): ",
];

/// Prompt on `output` and read answers from `input` until a valid set is given.
pub fn prompt_initial_conditions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PendulumConfig, ConfigError> {
    writeln!(
        output,
        "Welcome to the double pendulum simulator. Specify your initial conditions:"
    )?;

    let mut attempt = 1;
    loop {
        match ask_once(input, output) {
            Ok(cfg) => return Ok(cfg),
            Err(e) if e.is_retryable() => {
                debug!("attempt {attempt} rejected: {e}");
                writeln!(output, "Invalid input: {e}. Please try again.")?;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// One pass over the six prompts, then the range check
fn ask_once<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PendulumConfig, ConfigError> {
    let mut values = [0.0; 6];
    for (value, prompt) in values.iter_mut().zip(PROMPTS) {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ConfigError::InputClosed);
        }
        *value = parse_answer(&line)?;
    }

    let [mass1, mass2, length1, length2, angle1, angle2] = values;
    let cfg = PendulumConfig {
        mass1,
        mass2,
        length1,
        length2,
        angle1,
        angle2,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn parse_answer(line: &str) -> Result<f64, ConfigError> {
    let answer = line.trim();
    if answer.is_empty() {
        return Err(ConfigError::EmptyInput);
    }
    if answer.chars().count() > MAX_ANSWER_LEN {
        return Err(ConfigError::InputTooLong);
    }
    answer
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber(answer.to_string()))
}
