use crate::Section;
use bytesstr::BytesStr;
use std::mem;

#[derive(Debug, thiserror::Error)]
pub enum ParseSessionDescriptionError {
    #[error("line {line} is not of the form `<type>=<value>`")]
    InvalidLine { line: usize },
    #[error("line {line} declares an unsupported version, only `v=0` is allowed")]
    UnsupportedVersion { line: usize },
    #[error("line {line} is missing the token following the attribute name")]
    MissingAttributeToken { line: usize },
    #[error("line {line} is missing the `=` separator")]
    MissingEquals { line: usize },
}

/// Attributes whose key is extended by the token following the `:`, e.g. `a=rtpmap:96`
const TOKENIZED_ATTRIBUTES: [&str; 4] = ["a=fmtp", "a=rtpmap", "a=framesize", "a=extmap"];

pub(crate) struct Parser {
    sections: Vec<Section>,
    current: Section,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            sections: vec![],
            current: Section::root(),
        }
    }
}

impl Parser {
    /// Parse a single line without its line ending. `line` must be a slice of `src`.
    pub(crate) fn parse_line(
        &mut self,
        src: &BytesStr,
        line_number: usize,
        line: &str,
    ) -> Result<(), ParseSessionDescriptionError> {
        let &[type_, b'=', ..] = line.as_bytes() else {
            return Err(ParseSessionDescriptionError::InvalidLine { line: line_number });
        };

        log::trace!("{line}");

        match type_ {
            b'v' => {
                if line != "v=0" {
                    return Err(ParseSessionDescriptionError::UnsupportedVersion {
                        line: line_number,
                    });
                }
            }
            b'a' | b'b' => self.parse_attribute(src, line_number, line)?,
            b'm' => {
                let format = &line[2..];

                log::trace!("new section '{format}'");

                let section = Section::new(src.slice_ref(format));
                self.sections.push(mem::replace(&mut self.current, section));
            }
            _ => {
                let equal_pos = line
                    .find('=')
                    .ok_or(ParseSessionDescriptionError::MissingEquals { line: line_number })?;

                let (key, value) = line.split_at(equal_pos + 1);

                self.add(src, key, value);
            }
        }

        Ok(())
    }

    fn parse_attribute(
        &mut self,
        src: &BytesStr,
        line_number: usize,
        line: &str,
    ) -> Result<(), ParseSessionDescriptionError> {
        let Some(colon_pos) = line[2..].find(':').map(|pos| pos + 2) else {
            self.add(src, line, &line[line.len()..]);
            return Ok(());
        };

        let name = &line[..colon_pos];

        if TOKENIZED_ATTRIBUTES.contains(&name) {
            let space_pos = line[colon_pos + 1..]
                .find(' ')
                .map(|pos| pos + colon_pos + 1)
                .ok_or(ParseSessionDescriptionError::MissingAttributeToken { line: line_number })?;

            self.add(src, &line[..space_pos], &line[space_pos + 1..]);
        } else {
            self.add(src, name, &line[colon_pos + 1..]);
        }

        Ok(())
    }

    fn add(&mut self, src: &BytesStr, key: &str, value: &str) {
        let key = key.trim();
        let value = value.trim();

        log::trace!("adding '{key}' => '{value}'");

        self.current
            .attributes
            .push(src.slice_ref(key), src.slice_ref(value));
    }

    pub(crate) fn finish(mut self) -> Vec<Section> {
        self.sections.push(self.current);
        self.sections
    }
}
