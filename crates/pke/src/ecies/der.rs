//! Minimal DER tag/length/value reader for EC key containers
//!
//! Only definite lengths in short form or the one- and two-byte long forms
//! are accepted, and they must be minimally encoded. Anything else is
//! reported as a malformed container.

use crate::error::{Error, Result};

pub(crate) const TAG_INTEGER: u8 = 0x02;
pub(crate) const TAG_BIT_STRING: u8 = 0x03;
pub(crate) const TAG_OCTET_STRING: u8 = 0x04;
pub(crate) const TAG_OID: u8 = 0x06;
pub(crate) const TAG_SEQUENCE: u8 = 0x30;
pub(crate) const TAG_CONTEXT_0: u8 = 0xa0;
pub(crate) const TAG_CONTEXT_1: u8 = 0xa1;

/// Cursor over a DER-encoded byte string
#[derive(Debug)]
pub(crate) struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    pub fn peek_tag(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Read one element with the given tag and return its contents
    pub fn read_tlv(&mut self, tag: u8) -> Result<&'a [u8]> {
        match self.peek_tag() {
            Some(t) if t == tag => {}
            Some(_) => return Err(Error::MalformedKeyContainer("unexpected DER tag")),
            None => return Err(Error::MalformedKeyContainer("truncated DER element")),
        }
        self.pos += 1;

        let len = self.read_length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.input.len())
            .ok_or(Error::MalformedKeyContainer("DER length exceeds container"))?;

        let value = &self.input[self.pos..end];
        self.pos = end;
        Ok(value)
    }

    /// Enter a SEQUENCE
    pub fn read_sequence(&mut self) -> Result<DerReader<'a>> {
        self.read_tlv(TAG_SEQUENCE).map(DerReader::new)
    }

    /// Enter a constructed context-specific element such as `[0]` or `[1]`
    pub fn read_context(&mut self, tag: u8) -> Result<DerReader<'a>> {
        self.read_tlv(tag).map(DerReader::new)
    }

    /// Read an INTEGER that fits in a single content byte
    pub fn read_small_integer(&mut self) -> Result<u8> {
        match self.read_tlv(TAG_INTEGER)? {
            [value] if *value < 0x80 => Ok(*value),
            _ => Err(Error::MalformedKeyContainer("unexpected version integer")),
        }
    }

    pub fn read_oid(&mut self) -> Result<&'a [u8]> {
        self.read_tlv(TAG_OID)
    }

    pub fn read_octet_string(&mut self) -> Result<&'a [u8]> {
        self.read_tlv(TAG_OCTET_STRING)
    }

    /// Read a BIT STRING with no unused bits and return the payload bytes
    pub fn read_bit_string(&mut self) -> Result<&'a [u8]> {
        match self.read_tlv(TAG_BIT_STRING)? {
            [0x00, payload @ ..] => Ok(payload),
            _ => Err(Error::MalformedKeyContainer("BIT STRING has unused bits")),
        }
    }

    /// Require that every byte has been consumed
    pub fn finish(self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(Error::MalformedKeyContainer("trailing bytes after DER element"))
        }
    }

    fn read_length(&mut self) -> Result<usize> {
        let first = self.next_byte()?;
        match first {
            0x00..=0x7f => Ok(first as usize),
            0x81 => {
                let len = self.next_byte()? as usize;
                if len < 0x80 {
                    return Err(Error::MalformedKeyContainer("non-minimal DER length"));
                }
                Ok(len)
            }
            0x82 => {
                let hi = self.next_byte()? as usize;
                let lo = self.next_byte()? as usize;
                let len = (hi << 8) | lo;
                if len < 0x100 {
                    return Err(Error::MalformedKeyContainer("non-minimal DER length"));
                }
                Ok(len)
            }
            _ => Err(Error::MalformedKeyContainer("unsupported DER length form")),
        }
    }

    fn next_byte(&mut self) -> Result<u8> {
        let byte = self
            .input
            .get(self.pos)
            .copied()
            .ok_or(Error::MalformedKeyContainer("truncated DER length"))?;
        self.pos += 1;
        Ok(byte)
    }
}
