//! Utility-class token parsing.
//!
//! A token has the shape `modifier:modifier:[!][-]utility`. Colons inside
//! square brackets or parentheses belong to arbitrary values and never split
//! the token.

/// A single class token split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    /// Variant modifiers such as `hover` or `focus-visible`, in source order.
    pub modifiers: Vec<&'a str>,
    /// `!` important marker, leading (`!p-4`) or trailing (`p-4!`).
    pub important: bool,
    /// The utility itself, without modifiers, markers or a negative sign.
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (i, c) in token.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        // -mt-2 and mt-4 govern the same property
        if base.len() > 1 {
            if let Some(rest) = base.strip_prefix('-') {
                base = rest;
            }
        }

        Self {
            modifiers,
            important,
            base,
        }
    }

    /// Prefix shared by every conflict key of this token.
    ///
    /// Modifier order does not matter (`hover:focus:` equals `focus:hover:`),
    /// except across arbitrary variants, which keep their position.
    pub fn scope(&self) -> String {
        fn flush(run: &mut Vec<&str>, scope: &mut String) {
            run.sort_unstable();
            for m in run.drain(..) {
                scope.push_str(m);
                scope.push(':');
            }
        }

        let mut scope = String::new();
        let mut run: Vec<&str> = Vec::new();

        for m in &self.modifiers {
            if m.starts_with('[') {
                flush(&mut run, &mut scope);
                scope.push_str(m);
                scope.push(':');
            } else {
                run.push(*m);
            }
        }
        flush(&mut run, &mut scope);

        if self.important {
            scope.push('!');
        }
        scope
    }
}
