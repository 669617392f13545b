//! Linear containers.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;

use core::fmt;

/// Writes `[a, b, c]`.
fn write_list<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
