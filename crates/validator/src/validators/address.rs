//! Mailbox parsing for [`IsEmail`](super::IsEmail).
//!
//! Accepts exactly one RFC 5322 mailbox: a bare `addr-spec`, a `name-addr`
//! (`Name <local@domain>`), or a group holding a single address
//! (`Team: local@domain;`). Atoms and quoted strings may carry UTF-8
//! (RFC 6532). Comments are allowed where folding whitespace is.

use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Malformed;

type Parsed<T> = Result<T, Malformed>;

/// Returns `true` if `input` is a single well-formed mailbox.
pub(crate) fn is_single_mailbox(input: &str) -> bool {
    AddressParser { rest: input }.single_mailbox().is_ok()
}

struct AddressParser<'a> {
    rest: &'a str,
}

impl AddressParser<'_> {
    fn single_mailbox(&mut self) -> Parsed<()> {
        let mailboxes = self.address(true)?;
        self.skip_cfws()?;
        if self.rest.is_empty() && mailboxes == 1 {
            Ok(())
        } else {
            Err(Malformed)
        }
    }

    /// Parses a mailbox, or a group when `groups` is set. Returns the number
    /// of mailboxes read.
    fn address(&mut self, groups: bool) -> Parsed<usize> {
        self.skip_space();
        if self.rest.is_empty() {
            return Err(Malformed);
        }

        // addr-spec is the narrower grammar, so it goes first.
        if self.addr_spec().is_ok() {
            self.skip_space();
            if self.eat('(') {
                self.comment()?;
            }
            return Ok(1);
        }

        if self.peek() != Some('<') {
            self.phrase()?;
        }
        self.skip_space();
        if groups && self.eat(':') {
            return self.group_list();
        }
        if !self.eat('<') {
            return Err(Malformed);
        }
        self.addr_spec()?;
        if !self.eat('>') {
            return Err(Malformed);
        }
        Ok(1)
    }

    /// `local-part "@" domain`. Leaves the input untouched on failure.
    fn addr_spec(&mut self) -> Parsed<()> {
        let start = self.rest;
        let parsed = self.addr_spec_inner();
        if parsed.is_err() {
            self.rest = start;
        }
        parsed
    }

    fn addr_spec_inner(&mut self) -> Parsed<()> {
        self.skip_space();
        match self.peek() {
            None => return Err(Malformed),
            Some('"') => {
                if self.quoted_string()? == 0 {
                    return Err(Malformed);
                }
            }
            Some(_) => self.atom(true, false)?,
        }

        if !self.eat('@') {
            return Err(Malformed);
        }

        self.skip_space();
        match self.peek() {
            None => Err(Malformed),
            Some('[') => self.domain_literal(),
            Some(_) => self.atom(true, false),
        }
    }

    /// One or more words. Stops at the first token that is not a word.
    fn phrase(&mut self) -> Parsed<()> {
        let mut words = 0_usize;
        loop {
            if words > 0 {
                self.skip_cfws()?;
            }
            self.skip_space();
            let word = match self.peek() {
                None => break,
                Some('"') => self.quoted_string().map(drop),
                // Dots are tolerated in display names (`John Q. Public`).
                Some(_) => self.atom(true, true),
            };
            if word.is_err() {
                break;
            }
            words += 1;
        }
        if words == 0 { Err(Malformed) } else { Ok(()) }
    }

    /// Mailboxes after `display-name ":"` up to the closing `;`.
    fn group_list(&mut self) -> Parsed<usize> {
        self.skip_space();
        if self.eat(';') {
            self.skip_cfws()?;
            return Ok(0);
        }

        let mut mailboxes = 0;
        loop {
            self.skip_space();
            mailboxes += self.address(false)?;
            self.skip_cfws()?;
            if self.eat(';') {
                self.skip_cfws()?;
                return Ok(mailboxes);
            }
            if !self.eat(',') {
                return Err(Malformed);
            }
        }
    }

    fn atom(&mut self, dot: bool, permissive: bool) -> Parsed<()> {
        let input = self.rest;
        let end = input.find(|c: char| !is_atext(c, dot)).unwrap_or(input.len());
        if end == 0 {
            return Err(Malformed);
        }

        let (atom, rest) = input.split_at(end);
        if !permissive && (atom.starts_with('.') || atom.ends_with('.') || atom.contains("..")) {
            return Err(Malformed);
        }
        self.rest = rest;
        Ok(())
    }

    /// Consumes a quoted string and returns the number of characters it
    /// holds once unescaped.
    fn quoted_string(&mut self) -> Parsed<usize> {
        let input = self.rest;
        let body = input.strip_prefix('"').ok_or(Malformed)?;

        let mut len = 0;
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            if escaped {
                if !is_vchar(c) && !is_wsp(c) {
                    return Err(Malformed);
                }
                len += 1;
                escaped = false;
            } else if is_qtext(c) || is_wsp(c) {
                len += 1;
            } else if c == '"' {
                self.rest = &body[i + 1..];
                return Ok(len);
            } else if c == '\\' {
                escaped = true;
            } else {
                return Err(Malformed);
            }
        }
        Err(Malformed)
    }

    /// `"[" dtext "]"` where the text is an IPv4 or IPv6 address.
    fn domain_literal(&mut self) -> Parsed<()> {
        let input = self.rest;
        let body = input.strip_prefix('[').ok_or(Malformed)?;
        let end = body.find(']').ok_or(Malformed)?;
        let dtext = &body[..end];

        if !dtext.chars().all(is_dtext) {
            return Err(Malformed);
        }
        dtext.parse::<IpAddr>().map_err(|_| Malformed)?;

        self.rest = &body[end + 1..];
        Ok(())
    }

    /// Body of a comment, after the opening `(`. Comments nest.
    fn comment(&mut self) -> Parsed<()> {
        let input = self.rest;
        let mut depth = 1_usize;
        let mut chars = input.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.rest = &input[i + 1..];
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(Malformed)
    }

    fn skip_cfws(&mut self) -> Parsed<()> {
        self.skip_space();
        while self.eat('(') {
            self.comment()?;
            self.skip_space();
        }
        Ok(())
    }

    fn skip_space(&mut self) {
        self.rest = self.rest.trim_start_matches([' ', '\t']);
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

const fn is_vchar(c: char) -> bool {
    matches!(c, '!'..='~') || !c.is_ascii()
}

const fn is_wsp(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

const fn is_qtext(c: char) -> bool {
    !matches!(c, '\\' | '"') && is_vchar(c)
}

const fn is_dtext(c: char) -> bool {
    !matches!(c, '[' | ']' | '\\') && is_vchar(c)
}

const fn is_atext(c: char, dot: bool) -> bool {
    if c == '.' {
        return dot;
    }
    !matches!(
        c,
        '"' | '(' | ')' | ',' | ':' | ';' | '<' | '>' | '@' | '[' | '\\' | ']'
    ) && is_vchar(c)
}

// ============================================================================
// TESTS
// ============================================================================
