use std::io::{self, BufRead, Write};

const PROMPT: &str = "Confirm[y/n] ";

/// Ask the operator to confirm the names before anything is written.
///
/// Re-prompts until the answer is `y` or `n` (any case). End of input counts
/// as `n`.
pub fn confirm<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    skill_name: &str,
    level_name: &str,
) -> io::Result<bool> {
    write!(
        output,
        "skill_name: {skill_name}\nlevel_name: {level_name}\n{PROMPT}"
    )?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }
        match line.trim_end_matches(['\r', '\n']).to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }
        }
    }
}
