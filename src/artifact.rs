//! Compiled artifacts: the word-oriented form in which lists and whole
//! catalogs leave the producing process.
//!
//! A single list is stored as a record of `u32` words:
//!
//! ```text
//! [element_count, cursor, version_tag, leading_state_flag, values...]
//! ```
//!
//! - `leading_state_flag == 1`: code point 0 is not a member and `values` are
//!   the boundaries
//! - `leading_state_flag == 0`: code point 0 is a member and `values` are the
//!   boundaries followed by a dummy 0
//!
//! Either way `element_count` is the length of the full form and the record
//! is `4 + element_count` words. `cursor` is always 0 at rest.
//!
//! A catalog is a header followed by one entry per property:
//!
//! ```text
//! [version_tag, property_count]
//! [name_byte_len, name words..., variant_flags, canonical, latin-1?, non-latin-1?]
//! ```

use log::{debug, trace};

use crate::catalog::{Catalog, PropertyTables};
use crate::error::{PropertyError, Result};
use crate::invlist::{self, InversionList};

/// Structural version of the record layout. Records carrying any other tag
/// are rejected before their contents are looked at.
pub const INVLIST_VERSION: u32 = 0x1F50_0002;

/// Words in a record header.
pub const HEADER_LEN: usize = 4;

const FLAG_LATIN1: u32 = 1 << 0;
const FLAG_NON_LATIN1: u32 = 1 << 1;
const KNOWN_FLAGS: u32 = FLAG_LATIN1 | FLAG_NON_LATIN1;

/// A compiled record viewed in place, header fields split out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInvList<'a> {
    pub element_count: u32,
    pub cursor: u32,
    pub version_tag: u32,
    pub leading_state_flag: u32,
    /// Everything after the header, the dummy 0 included
    pub values: &'a [u32],
}

impl<'a> RawInvList<'a> {
    /// Split the header off `words`. Only the header length is checked here.
    pub fn from_words(words: &'a [u32]) -> Result<Self> {
        match words {
            [element_count, cursor, version_tag, leading_state_flag, values @ ..] => Ok(Self {
                element_count: *element_count,
                cursor: *cursor,
                version_tag: *version_tag,
                leading_state_flag: *leading_state_flag,
                values,
            }),
            _ => Err(PropertyError::malformed(format!(
                "record of {} words is shorter than its {} word header",
                words.len(),
                HEADER_LEN
            ))),
        }
    }

    /// Check the version, then every structural invariant of the record.
    pub fn validate(&self) -> Result<()> {
        if self.version_tag != INVLIST_VERSION {
            return Err(PropertyError::VersionMismatch {
                expected: INVLIST_VERSION,
                found: self.version_tag,
            });
        }
        if self.element_count as usize != self.values.len() {
            return Err(PropertyError::malformed(format!(
                "element count {} disagrees with {} stored values",
                self.element_count,
                self.values.len()
            )));
        }
        if self.cursor != 0 {
            return Err(PropertyError::malformed(format!(
                "cursor {} is not at rest",
                self.cursor
            )));
        }
        let boundaries = self.boundaries()?;
        invlist::validate(self.initial_state()?, boundaries)
    }

    /// Validate and build the list.
    pub fn to_list(&self) -> Result<InversionList> {
        self.validate()?;
        let initial_state = self.initial_state()?;
        InversionList::from_boundaries(initial_state, self.boundaries()?.iter().copied())
    }

    fn initial_state(&self) -> Result<bool> {
        match self.leading_state_flag {
            1 => Ok(false),
            0 => Ok(true),
            flag => Err(PropertyError::malformed(format!(
                "leading state flag {} is neither 0 nor 1",
                flag
            ))),
        }
    }

    /// The stored boundaries, without the dummy.
    fn boundaries(&self) -> Result<&'a [u32]> {
        if self.initial_state()? {
            match self.values.split_last() {
                Some((&0, boundaries)) => Ok(boundaries),
                _ => Err(PropertyError::malformed(
                    "record starting with a member range lacks its dummy 0",
                )),
            }
        } else {
            Ok(self.values)
        }
    }
}

/// Append the record for `list` to `out`.
pub fn encode_into(list: &InversionList, out: &mut Vec<u32>) {
    let element_count = list.full_len() as u32;
    let flag = match list.initial_state() {
        true => 0,
        false => 1,
    };
    out.reserve(HEADER_LEN + element_count as usize);
    out.extend_from_slice(&[element_count, 0, INVLIST_VERSION, flag]);
    out.extend_from_slice(list.boundaries());
    if list.initial_state() {
        out.push(0);
    }
}

/// The record for `list`.
pub fn encode(list: &InversionList) -> Vec<u32> {
    let mut out = Vec::new();
    encode_into(list, &mut out);
    out
}

/// Decode one record occupying all of `words`.
pub fn decode(words: &[u32]) -> Result<InversionList> {
    RawInvList::from_words(words)?.to_list()
}

/// Decode the record at the front of `words`, returning the rest.
fn decode_prefix(words: &[u32]) -> Result<(InversionList, &[u32])> {
    let raw = RawInvList::from_words(words)?;
    if raw.version_tag != INVLIST_VERSION {
        return Err(PropertyError::VersionMismatch {
            expected: INVLIST_VERSION,
            found: raw.version_tag,
        });
    }
    let len = HEADER_LEN + raw.element_count as usize;
    if words.len() < len {
        return Err(PropertyError::malformed(format!(
            "record claims {} words but only {} remain",
            len,
            words.len()
        )));
    }
    let (record, rest) = words.split_at(len);
    Ok((decode(record)?, rest))
}

/// Encode a whole catalog.
pub fn write_catalog(catalog: &Catalog) -> Vec<u32> {
    let mut out = vec![INVLIST_VERSION, catalog.len() as u32];
    for (_, tables) in catalog.iter() {
        write_name(tables.name(), &mut out);

        let mut flags = 0;
        if tables.latin1().is_some() {
            flags |= FLAG_LATIN1;
        }
        if tables.non_latin1().is_some() {
            flags |= FLAG_NON_LATIN1;
        }
        out.push(flags);

        encode_into(tables.canonical(), &mut out);
        if let Some(l1) = tables.latin1() {
            encode_into(l1, &mut out);
        }
        if let Some(high) = tables.non_latin1() {
            encode_into(high, &mut out);
        }
    }
    debug!(
        "encoded {} properties into {} words",
        catalog.len(),
        out.len()
    );
    out
}

/// Decode and validate a whole catalog. Trailing words are rejected.
pub fn read_catalog(words: &[u32]) -> Result<Catalog> {
    let (version, count, mut rest) = match words {
        [version, count, rest @ ..] => (*version, *count, rest),
        _ => return Err(PropertyError::malformed("artifact header is truncated")),
    };
    if version != INVLIST_VERSION {
        return Err(PropertyError::VersionMismatch {
            expected: INVLIST_VERSION,
            found: version,
        });
    }

    let mut tables = Vec::with_capacity((count as usize).min(rest.len()));
    for _ in 0..count {
        let (name, after_name) = read_name(rest)?;
        let (&flags, after_flags) = after_name
            .split_first()
            .ok_or_else(|| PropertyError::malformed(format!("property {}: missing variant flags", name)))?;
        if flags & !KNOWN_FLAGS != 0 {
            return Err(PropertyError::malformed(format!(
                "property {}: unknown variant flags {:#x}",
                name, flags
            )));
        }
        rest = after_flags;

        let (canonical, after) = decode_prefix(rest)?;
        rest = after;
        let latin1 = match flags & FLAG_LATIN1 != 0 {
            true => {
                let (list, after) = decode_prefix(rest)?;
                rest = after;
                Some(list)
            }
            false => None,
        };
        let non_latin1 = match flags & FLAG_NON_LATIN1 != 0 {
            true => {
                let (list, after) = decode_prefix(rest)?;
                rest = after;
                Some(list)
            }
            false => None,
        };

        trace!("decoded property {} with variant flags {:#x}", name, flags);
        tables.push(PropertyTables::from_parts(name, canonical, latin1, non_latin1)?);
    }

    if !rest.is_empty() {
        return Err(PropertyError::malformed(format!(
            "{} words follow the last property",
            rest.len()
        )));
    }
    debug!("decoded artifact with {} properties", tables.len());
    Catalog::from_tables(tables)
}

fn write_name(name: &str, out: &mut Vec<u32>) {
    out.push(name.len() as u32);
    for chunk in name.as_bytes().chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        out.push(u32::from_le_bytes(word));
    }
}

fn read_name(words: &[u32]) -> Result<(String, &[u32])> {
    let (&byte_len, rest) = words
        .split_first()
        .ok_or_else(|| PropertyError::malformed("missing property name"))?;
    let byte_len = byte_len as usize;
    let word_len = byte_len.div_ceil(4);
    if rest.len() < word_len {
        return Err(PropertyError::malformed(format!(
            "property name of {} bytes runs past the end of the artifact",
            byte_len
        )));
    }
    let (name_words, rest) = rest.split_at(word_len);
    let mut bytes = words_to_le_bytes(name_words);
    if bytes[byte_len..].iter().any(|&b| b != 0) {
        return Err(PropertyError::malformed("property name padding is not zero"));
    }
    bytes.truncate(byte_len);
    let name = String::from_utf8(bytes)
        .map_err(|e| PropertyError::malformed(format!("property name is not UTF-8: {}", e)))?;
    Ok((name, rest))
}

/// Serialize words as little-endian bytes.
pub fn words_to_le_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

/// Parse little-endian bytes into words. The length must be a multiple of 4.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(PropertyError::malformed(format!(
            "artifact of {} bytes is not a whole number of words",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
