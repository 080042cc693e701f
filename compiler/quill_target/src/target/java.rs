//! Java: the reference C-family target.

use crate::{EscapeTable, Target, TargetKind};

/// Double-quoted literals, the default C-family escape table, and every
/// provided behaviour of [`Target`].
#[derive(Debug)]
pub struct JavaTarget {
    escapes: EscapeTable,
}

impl JavaTarget {
    pub fn new() -> Self {
        JavaTarget {
            escapes: EscapeTable::c_family(),
        }
    }
}

impl Default for JavaTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for JavaTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Java
    }

    fn quote_char(&self) -> char {
        '"'
    }

    fn escape_table(&self) -> &EscapeTable {
        &self.escapes
    }
}
