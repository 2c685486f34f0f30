//! Parsing entry point.

use statetree_ast::{Factory, MachineFile, bind_parents};
use tracing::{debug, warn};

use crate::{ParseError, Parser};

/// Parses `source` with `parser` and binds the parents of the resulting tree.
///
/// The returned tree is complete: every node below the root can navigate up
/// to it. Spans are taken from the parser as they are.
pub fn parse_machine_file<'a, P>(
    parser: &P,
    factory: &Factory<'a>,
    source: &str,
) -> Result<&'a MachineFile<'a>, ParseError>
where
    P: Parser + ?Sized,
{
    debug!(parser = parser.name(), bytes = source.len(), "Parsing machine file");

    let file = parser.parse(factory, source).inspect_err(|err| {
        warn!(parser = parser.name(), error = %err, "Failed to parse machine file");
    })?;
    let file = bind_parents(file);

    debug!(
        parser = parser.name(),
        machines = file.machines.len(),
        span = ?file.span,
        "Parsed machine file"
    );
    Ok(file)
}
