#[derive(Debug)]
pub(crate) struct CliArgs {
    pub cmd: String,
    pub timing: bool,
    pub json_out: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: lay <tokens|check> [timing] [json] <file>"
}

pub(crate) fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut argv = argv.into_iter();
    let cmd = argv.next().ok_or_else(|| usage().to_string())?;

    let mut timing = false;
    let mut json_out = false;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        if a == "timing" {
            timing = true;
        } else if a == "json" {
            json_out = true;
        } else {
            positional.push(a);
        }
    }

    Ok(CliArgs {
        cmd,
        timing,
        json_out,
        positional,
    })
}
