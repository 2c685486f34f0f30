//! Parser trait definition.

use statetree_ast::{Factory, MachineFile};

use crate::ParseError;

/// Turns source text into a machine file tree.
///
/// A parser builds nodes through the [`Factory`] it is given, with spans
/// pointing into `source`. It does not need to bind parents;
/// [`parse_machine_file`](crate::parse_machine_file) does that afterwards.
///
/// # Example
///
/// ```rust
/// use statetree_ast::{Factory, MachineFile};
/// use statetree_parser::{ParseError, Parser};
///
/// /// Treats every non-empty line as a machine id.
/// struct LineParser;
///
/// impl Parser for LineParser {
///     fn name(&self) -> &str {
///         "lines"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["machines"]
///     }
///
///     fn parse<'a>(
///         &self,
///         factory: &Factory<'a>,
///         source: &str,
///     ) -> Result<&'a MachineFile<'a>, ParseError> {
///         let machines: Vec<_> = source
///             .lines()
///             .filter(|line| !line.is_empty())
///             .map(|line| {
///                 let id = factory.create_id(line);
///                 factory.create_machine(factory.create_machine_config(Some(id)))
///             })
///             .collect();
///         Ok(factory.create_machine_file(&machines))
///     }
/// }
///
/// assert!(LineParser.can_parse("MACHINES"));
/// assert!(!LineParser.can_parse("ts"));
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles, without the leading
    /// dot (e.g., `["ts", "js"]`).
    fn extensions(&self) -> &[&str];

    /// Parses `source` into a tree allocated through `factory`.
    ///
    /// Returns the root `MachineFile`, or an error if the source cannot be
    /// parsed.
    fn parse<'a>(
        &self,
        factory: &Factory<'a>,
        source: &str,
    ) -> Result<&'a MachineFile<'a>, ParseError>;

    /// Returns true if this parser handles the given file extension.
    /// Comparison ignores ASCII case.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
