//! Console session - Prompt for a character, print its combat levels

use combat_core::{calculate, CalcError, CombatResult, GameVariant, Stat, StatSet};
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;

const BANNER: &str = "RuneScape Combat Level Calculator 1.0";

/// Anything that ends a session early
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("Invalid {stat} level '{input}': {source}")]
    MalformedLevel {
        stat: Stat,
        input: String,
        source: ParseIntError,
    },
    #[error("Input ended while waiting for: {prompt}")]
    UnexpectedEof { prompt: String },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One line-oriented calculator run over any reader/writer pair
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run the prompts, compute and print the result
    ///
    /// The version token is checked before any other prompt is shown.
    pub fn run(&mut self) -> Result<CombatResult, SessionError> {
        writeln!(self.output, "{}", BANNER)?;
        writeln!(self.output)?;

        let token = self.prompt("RuneScape Version (RS3 or OSRS)? ")?;
        let variant = GameVariant::from_token(&token)?;
        tracing::debug!(%variant, "version accepted");

        let name = self.prompt("Character Name: ")?;

        let stats = self.collect_stats(variant)?;
        let result = calculate(&stats, variant)?;

        writeln!(self.output)?;
        writeln!(self.output, "{}", result.summary(&name))?;
        self.output.flush()?;
        Ok(result)
    }

    /// Write an error for the user
    pub fn report(&mut self, err: &SessionError) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", err)?;
        self.output.flush()
    }

    fn collect_stats(&mut self, variant: GameVariant) -> Result<StatSet, SessionError> {
        let mut levels = Vec::with_capacity(variant.required_stats().len());
        for stat in variant.required_stats() {
            levels.push((*stat, self.read_level(*stat)?));
        }
        Ok(levels.into_iter().collect())
    }

    fn read_level(&mut self, stat: Stat) -> Result<u32, SessionError> {
        let input = self.prompt(&format!("{} Level: ", stat))?;
        input
            .parse::<u32>()
            .map_err(|source| SessionError::MalformedLevel {
                stat,
                input,
                source,
            })
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::UnexpectedEof {
                prompt: prompt.trim_end().to_string(),
            });
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (Result<CombatResult, SessionError>, String) {
        let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = session.run();
        if let Err(ref err) = result {
            session.report(err).unwrap();
        }
        (result, String::from_utf8(session.output).unwrap())
    }

    #[test]
    fn test_osrs_session() {
        let (result, output) = run_session("OSRS\nZezima\n25\n25\n24\n26\n30\n30\n26\n");
        let result = result.unwrap();
        assert_eq!(result.overall(), 32);

        assert!(output.starts_with(BANNER));
        assert!(output.contains("Zezima's Combat Level is: 32\n"));
        assert!(output.contains("Melee: 32\n"));
        assert!(output.contains("Ranged: 28\n"));
        assert!(output.contains("Magic: 30\n"));
        assert!(output.contains("Highest Style: Melee\n"));
        assert!(!output.contains("Summoning Level"));
    }

    #[test]
    fn test_rs3_session_prompts_for_summoning() {
        let (result, output) = run_session("RS3\nZezima\n51\n50\n50\n26\n37\n47\n40\n11\n");
        assert_eq!(result.unwrap(), CombatResult::from_styles(63, 47, 54));
        assert!(output.contains("Summoning Level: "));
        assert!(output.contains("Zezima's Combat Level is: 63\n"));
        assert!(output.ends_with("Highest Style: Melee\n"));
    }

    #[test]
    fn test_prompts_follow_required_order() {
        let (_, output) = run_session("RS3\nZezima\n51\n50\n50\n26\n37\n47\n40\n11\n");
        let positions: Vec<usize> = GameVariant::Modern
            .required_stats()
            .iter()
            .map(|stat| output.find(&format!("{} Level: ", stat)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_invalid_version_stops_before_name_prompt() {
        let (result, output) = run_session("RS2\nZezima\n1\n");
        assert!(matches!(
            result,
            Err(SessionError::Calc(CalcError::InvalidVariant { .. }))
        ));
        assert!(!output.contains("Character Name"));
        assert!(output.contains("Invalid RuneScape version: 'RS2'"));
    }

    #[test]
    fn test_version_line_whitespace_trimmed() {
        let (result, _) = run_session("  OSRS \r\nZezima\n25\n25\n24\n26\n30\n30\n26\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_numeric_level_reported_with_stat() {
        let (result, output) = run_session("OSRS\nZezima\n25\nlots\n");
        match result {
            Err(SessionError::MalformedLevel { stat, input, .. }) => {
                assert_eq!(stat, Stat::Strength);
                assert_eq!(input, "lots");
            }
            other => panic!("expected MalformedLevel, got {:?}", other),
        }
        assert!(output.contains("Invalid Strength level 'lots'"));
        assert!(!output.contains("Defence Level"));
    }

    #[test]
    fn test_negative_level_rejected() {
        let (result, _) = run_session("OSRS\nZezima\n-5\n");
        assert!(matches!(
            result,
            Err(SessionError::MalformedLevel {
                stat: Stat::Attack,
                ..
            })
        ));
    }

    #[test]
    fn test_eof_mid_session() {
        let (result, output) = run_session("RS3\nZezima\n51\n50\n50\n26\n37\n47\n40\n");
        assert!(matches!(result, Err(SessionError::UnexpectedEof { .. })));
        assert!(output.contains("Input ended while waiting for: Summoning Level:"));
    }
}
