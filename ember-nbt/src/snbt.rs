//! The stringified text form of NBT, as it appears inside legacy hover
//! events and command arguments: `{id:"minecraft:stick",Count:1b}`.

use thiserror::Error;

use crate::compound::NbtCompound;
use crate::tag::NbtTag;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnbtError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Unexpected character '{found}' at index {index}")]
    UnexpectedChar { found: char, index: usize },
    #[error("Expected a key at index {0}")]
    ExpectedKey(usize),
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Trailing data at index {0}")]
    TrailingData(usize),
}

/// Parses a complete sNBT compound from `input`. The whole string must be
/// consumed; anything left after the closing brace is an error.
pub fn from_snbt(input: &str) -> Result<NbtCompound, SnbtError> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let compound = parser.parse_compound()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(SnbtError::TrailingData(parser.pos));
    }
    Ok(compound)
}

/// Prints a compound in canonical sNBT: unquoted keys where possible,
/// double-quoted strings, lowercase numeric suffixes except `L`.
pub fn to_snbt(compound: &NbtCompound) -> String {
    let mut out = String::new();
    write_compound(&mut out, compound);
    out
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<char> {
        let char = self.peek();
        if char.is_some() {
            self.pos += 1;
        }
        char
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|char| char.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SnbtError> {
        match self.next() {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(SnbtError::UnexpectedChar {
                found,
                index: self.pos - 1,
            }),
            None => Err(SnbtError::UnexpectedEof),
        }
    }

    fn parse_compound(&mut self) -> Result<NbtCompound, SnbtError> {
        self.expect('{')?;
        let mut compound = NbtCompound::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(compound);
        }
        loop {
            self.skip_whitespace();
            let key = self.parse_key()?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value()?;
            compound.put(key, value);
            self.skip_whitespace();
            match self.next() {
                Some(',') => continue,
                Some('}') => return Ok(compound),
                Some(found) => {
                    return Err(SnbtError::UnexpectedChar {
                        found,
                        index: self.pos - 1,
                    })
                }
                None => return Err(SnbtError::UnexpectedEof),
            }
        }
    }

    fn parse_key(&mut self) -> Result<String, SnbtError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_quoted_string(quote),
            _ => {
                let start = self.pos;
                let token = self.take_unquoted_token();
                if token.is_empty() {
                    return Err(SnbtError::ExpectedKey(start));
                }
                Ok(token)
            }
        }
    }

    fn parse_value(&mut self) -> Result<NbtTag, SnbtError> {
        match self.peek() {
            Some('{') => Ok(NbtTag::Compound(self.parse_compound()?)),
            Some('[') => self.parse_list_or_array(),
            Some(quote @ ('"' | '\'')) => {
                Ok(NbtTag::String(self.parse_quoted_string(quote)?))
            }
            Some(_) => {
                let start = self.pos;
                let token = self.take_unquoted_token();
                if token.is_empty() {
                    let found = self.chars[start];
                    return Err(SnbtError::UnexpectedChar {
                        found,
                        index: start,
                    });
                }
                Ok(classify_token(token))
            }
            None => Err(SnbtError::UnexpectedEof),
        }
    }

    fn parse_quoted_string(&mut self, quote: char) -> Result<String, SnbtError> {
        self.expect(quote)?;
        let mut string = String::new();
        loop {
            match self.next() {
                Some('\\') => match self.next() {
                    Some(escaped @ ('\\' | '"' | '\'')) => string.push(escaped),
                    Some(found) => {
                        return Err(SnbtError::UnexpectedChar {
                            found,
                            index: self.pos - 1,
                        })
                    }
                    None => return Err(SnbtError::UnexpectedEof),
                },
                Some(char) if char == quote => return Ok(string),
                Some(char) => string.push(char),
                None => return Err(SnbtError::UnexpectedEof),
            }
        }
    }

    fn parse_list_or_array(&mut self) -> Result<NbtTag, SnbtError> {
        self.expect('[')?;
        // A typed array starts with its type letter and a semicolon.
        if let (Some(letter @ ('B' | 'I' | 'L')), Some(';')) =
            (self.peek(), self.chars.get(self.pos + 1).copied())
        {
            self.pos += 2;
            return self.parse_array(letter);
        }
        let mut list = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(NbtTag::List(list));
        }
        loop {
            self.skip_whitespace();
            list.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next() {
                Some(',') => continue,
                Some(']') => return Ok(NbtTag::List(list)),
                Some(found) => {
                    return Err(SnbtError::UnexpectedChar {
                        found,
                        index: self.pos - 1,
                    })
                }
                None => return Err(SnbtError::UnexpectedEof),
            }
        }
    }

    fn parse_array(&mut self, letter: char) -> Result<NbtTag, SnbtError> {
        let mut tokens = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.pos += 1;
            return array_from_tokens(letter, tokens);
        }
        loop {
            self.skip_whitespace();
            let token = self.take_unquoted_token();
            if token.is_empty() {
                return match self.peek() {
                    Some(found) => Err(SnbtError::UnexpectedChar {
                        found,
                        index: self.pos,
                    }),
                    None => Err(SnbtError::UnexpectedEof),
                };
            }
            tokens.push(token);
            self.skip_whitespace();
            match self.next() {
                Some(',') => continue,
                Some(']') => return array_from_tokens(letter, tokens),
                Some(found) => {
                    return Err(SnbtError::UnexpectedChar {
                        found,
                        index: self.pos - 1,
                    })
                }
                None => return Err(SnbtError::UnexpectedEof),
            }
        }
    }

    fn take_unquoted_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(char) = self.peek() {
            if char.is_ascii_alphanumeric() || matches!(char, '_' | '-' | '.' | '+') {
                token.push(char);
                self.pos += 1;
            } else {
                break;
            }
        }
        token
    }
}

/// Turns an unquoted token into the tag the grammar assigns it: booleans
/// and suffixed or plain numerics, falling back to a bare string.
fn classify_token(token: String) -> NbtTag {
    match token.as_str() {
        "true" => return NbtTag::Byte(1),
        "false" => return NbtTag::Byte(0),
        _ => {}
    }
    if let Some(rest) = strip_suffix_ignore_case(&token, 'b') {
        if let Ok(byte) = rest.parse::<i8>() {
            return NbtTag::Byte(byte);
        }
    }
    if let Some(rest) = strip_suffix_ignore_case(&token, 's') {
        if let Ok(short) = rest.parse::<i16>() {
            return NbtTag::Short(short);
        }
    }
    if let Some(rest) = strip_suffix_ignore_case(&token, 'l') {
        if let Ok(long) = rest.parse::<i64>() {
            return NbtTag::Long(long);
        }
    }
    if let Some(rest) = strip_suffix_ignore_case(&token, 'f') {
        if let Ok(float) = rest.parse::<f32>() {
            return NbtTag::Float(float);
        }
    }
    if let Some(rest) = strip_suffix_ignore_case(&token, 'd') {
        if let Ok(double) = rest.parse::<f64>() {
            return NbtTag::Double(double);
        }
    }
    if let Ok(int) = token.parse::<i32>() {
        return NbtTag::Int(int);
    }
    if token.contains('.') {
        if let Ok(double) = token.parse::<f64>() {
            return NbtTag::Double(double);
        }
    }
    NbtTag::String(token)
}

fn strip_suffix_ignore_case(token: &str, suffix: char) -> Option<&str> {
    let last = token.chars().last()?;
    if last.eq_ignore_ascii_case(&suffix) && token.len() > 1 {
        Some(&token[..token.len() - 1])
    } else {
        None
    }
}

fn array_from_tokens(letter: char, tokens: Vec<String>) -> Result<NbtTag, SnbtError> {
    match letter {
        'B' => tokens
            .into_iter()
            .map(|token| parse_array_number::<i8>(token, 'b'))
            .collect::<Result<_, _>>()
            .map(NbtTag::ByteArray),
        'I' => tokens
            .into_iter()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| SnbtError::InvalidNumber(token))
            })
            .collect::<Result<_, _>>()
            .map(NbtTag::IntArray),
        'L' => tokens
            .into_iter()
            .map(|token| parse_array_number::<i64>(token, 'l'))
            .collect::<Result<_, _>>()
            .map(NbtTag::LongArray),
        _ => unreachable!("array letter is checked before dispatch"),
    }
}

fn parse_array_number<N: std::str::FromStr>(
    token: String,
    suffix: char,
) -> Result<N, SnbtError> {
    let digits = strip_suffix_ignore_case(&token, suffix).unwrap_or(&token);
    digits
        .parse::<N>()
        .map_err(|_| SnbtError::InvalidNumber(token))
}

fn write_compound(out: &mut String, compound: &NbtCompound) {
    out.push('{');
    for (i, (key, tag)) in compound.child_tags.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quotes(key) {
            write_quoted(out, key);
        } else {
            out.push_str(key);
        }
        out.push(':');
        write_tag(out, tag);
    }
    out.push('}');
}

fn write_tag(out: &mut String, tag: &NbtTag) {
    match tag {
        NbtTag::Byte(byte) => {
            out.push_str(&byte.to_string());
            out.push('b');
        }
        NbtTag::Short(short) => {
            out.push_str(&short.to_string());
            out.push('s');
        }
        NbtTag::Int(int) => out.push_str(&int.to_string()),
        NbtTag::Long(long) => {
            out.push_str(&long.to_string());
            out.push('L');
        }
        NbtTag::Float(float) => {
            out.push_str(&float.to_string());
            out.push('f');
        }
        NbtTag::Double(double) => {
            out.push_str(&double.to_string());
            out.push('d');
        }
        NbtTag::String(string) => write_quoted(out, string),
        NbtTag::List(list) => {
            out.push('[');
            for (i, tag) in list.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_tag(out, tag);
            }
            out.push(']');
        }
        NbtTag::Compound(compound) => write_compound(out, compound),
        NbtTag::ByteArray(bytes) => {
            out.push_str("[B;");
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&byte.to_string());
                out.push('b');
            }
            out.push(']');
        }
        NbtTag::IntArray(ints) => {
            out.push_str("[I;");
            for (i, int) in ints.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&int.to_string());
            }
            out.push(']');
        }
        NbtTag::LongArray(longs) => {
            out.push_str("[L;");
            for (i, long) in longs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&long.to_string());
                out.push('L');
            }
            out.push(']');
        }
    }
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key
            .chars()
            .any(|char| !char.is_ascii_alphanumeric() && !matches!(char, '_' | '-' | '.' | '+'))
}

fn write_quoted(out: &mut String, string: &str) {
    out.push('"');
    for char in string.chars() {
        if matches!(char, '"' | '\\') {
            out.push('\\');
        }
        out.push(char);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_compound() {
        let compound = from_snbt("{id:\"minecraft:stick\",Count:1b}").unwrap();
        assert_eq!(
            compound.get_string("id"),
            Some(&"minecraft:stick".to_string())
        );
        assert_eq!(compound.get_byte("Count"), Some(1));
    }

    #[test]
    fn parses_nested_compound_and_whitespace() {
        let compound = from_snbt("{ tag : { Damage : 5 , display : { Name : 'x' } } }").unwrap();
        let tag = compound.get_compound("tag").unwrap();
        assert_eq!(tag.get_int("Damage"), Some(5));
        let display = tag.get_compound("display").unwrap();
        assert_eq!(display.get_string("Name"), Some(&"x".to_string()));
    }

    #[test]
    fn parses_numeric_suffixes_and_booleans() {
        let compound =
            from_snbt("{a:1b,b:2s,c:3,d:4L,e:1.5f,f:2.5d,g:true,h:false,i:3.25}").unwrap();
        assert_eq!(compound.get("a"), Some(&NbtTag::Byte(1)));
        assert_eq!(compound.get("b"), Some(&NbtTag::Short(2)));
        assert_eq!(compound.get("c"), Some(&NbtTag::Int(3)));
        assert_eq!(compound.get("d"), Some(&NbtTag::Long(4)));
        assert_eq!(compound.get("e"), Some(&NbtTag::Float(1.5)));
        assert_eq!(compound.get("f"), Some(&NbtTag::Double(2.5)));
        assert_eq!(compound.get("g"), Some(&NbtTag::Byte(1)));
        assert_eq!(compound.get("h"), Some(&NbtTag::Byte(0)));
        assert_eq!(compound.get("i"), Some(&NbtTag::Double(3.25)));
    }

    #[test]
    fn unquoted_word_ending_in_suffix_letter_is_a_string() {
        // "diamond" ends in 'd' but is not a number.
        let compound = from_snbt("{item:diamond}").unwrap();
        assert_eq!(compound.get_string("item"), Some(&"diamond".to_string()));
    }

    #[test]
    fn parses_lists_and_arrays() {
        let compound = from_snbt("{list:[\"a\",\"b\"],bytes:[B;1b,2b],ints:[I;1,2],longs:[L;3L]}")
            .unwrap();
        assert_eq!(
            compound.get("list"),
            Some(&NbtTag::List(vec![
                NbtTag::String("a".to_string()),
                NbtTag::String("b".to_string()),
            ]))
        );
        assert_eq!(compound.get("bytes"), Some(&NbtTag::ByteArray(vec![1, 2])));
        assert_eq!(compound.get("ints"), Some(&NbtTag::IntArray(vec![1, 2])));
        assert_eq!(compound.get("longs"), Some(&NbtTag::LongArray(vec![3])));
    }

    #[test]
    fn parses_escapes_in_quoted_strings() {
        let compound = from_snbt(r#"{name:"say \"hi\" \\ there"}"#).unwrap();
        assert_eq!(
            compound.get_string("name"),
            Some(&r#"say "hi" \ there"#.to_string())
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(from_snbt("{id:"), Err(SnbtError::UnexpectedEof));
        assert_eq!(from_snbt(""), Err(SnbtError::UnexpectedEof));
        assert!(matches!(
            from_snbt("{id:1}}"),
            Err(SnbtError::TrailingData(_))
        ));
        assert!(matches!(
            from_snbt("not a compound"),
            Err(SnbtError::UnexpectedChar { .. })
        ));
        assert!(matches!(from_snbt("{:1}"), Err(SnbtError::ExpectedKey(_))));
        assert_eq!(
            from_snbt("{a:[I;1,x]}"),
            Err(SnbtError::InvalidNumber("x".to_string()))
        );
    }

    #[test]
    fn print_parse_round_trip() {
        let mut display = NbtCompound::new();
        display.put("Name".to_string(), "Sharp \"Sword\"");
        let mut tag = NbtCompound::new();
        tag.put("Damage".to_string(), 5);
        tag.put("Unbreakable".to_string(), true);
        tag.put("display".to_string(), display);
        let mut root = NbtCompound::new();
        root.put("id".to_string(), "minecraft:diamond_sword");
        root.put("Count".to_string(), 1i8);
        root.put("tag".to_string(), tag);

        let text = to_snbt(&root);
        assert_eq!(from_snbt(&text).unwrap(), root);
    }

    #[test]
    fn canonical_output_shape() {
        let mut compound = NbtCompound::new();
        compound.put("Damage".to_string(), 5);
        compound.put("weird key".to_string(), 1i8);
        assert_eq!(to_snbt(&compound), "{Damage:5,\"weird key\":1b}");
    }

    #[test]
    fn empty_compound() {
        assert_eq!(from_snbt("{}").unwrap(), NbtCompound::new());
        assert_eq!(to_snbt(&NbtCompound::new()), "{}");
    }
}
