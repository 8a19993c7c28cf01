//! Indentation of generated code.

/// Unit of indentation for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A fixed number of spaces.
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Two spaces, the usual Lisp body indent.
    pub const LISP: Self = Self::Spaces(2);

    /// Leading whitespace for the given nesting level.
    pub fn render(&self, level: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(width * level),
            Self::Tab => "\t".repeat(level),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::LISP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(Indent::LISP.render(0), "");
        assert_eq!(Indent::LISP.render(3), "      ");
        assert_eq!(Indent::Spaces(4).render(1), "    ");
        assert_eq!(Indent::Tab.render(2), "\t\t");
    }
}
