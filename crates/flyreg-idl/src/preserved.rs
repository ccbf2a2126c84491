//! Retention of fields a message type does not model.
//!
//! Entity files carry far more than flyreg reads: interfaces, literals,
//! metadata, resources. prost skips fields it has no tag for, so decoding into
//! a partial message and encoding it again would strip them. [`Preserved`]
//! wraps a partial message and keeps every other field as raw wire bytes,
//! written back after the modelled fields on encode.

use std::ops::{Deref, DerefMut};

use prost::bytes::{Buf, BufMut};
use prost::encoding::{DecodeContext, WireType, decode_key, decode_varint, encode_key, encode_varint};
use prost::{DecodeError, Message};

/// Nesting limit for unknown groups, matching prost's own recursion limit.
const GROUP_DEPTH_LIMIT: u32 = 100;

/// Tags a message type decodes itself, oneof members included.
pub trait KnownFields {
  const TAGS: &'static [u32];
}

/// Wire encoding of the fields a message does not model, in the order read.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct UnknownFields {
  bytes: Vec<u8>,
}

impl UnknownFields {
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  fn merge_field(
    &mut self,
    tag: u32,
    wire_type: WireType,
    buf: &mut impl Buf,
    depth: u32,
  ) -> Result<(), DecodeError> {
    encode_key(tag, wire_type, &mut self.bytes);
    match wire_type {
      WireType::Varint => {
        let value = decode_varint(buf)?;
        encode_varint(value, &mut self.bytes);
      }
      WireType::SixtyFourBit => self.copy(buf, 8)?,
      WireType::ThirtyTwoBit => self.copy(buf, 4)?,
      WireType::LengthDelimited => {
        let len = decode_varint(buf)?;
        encode_varint(len, &mut self.bytes);
        self.copy(buf, len)?;
      }
      WireType::StartGroup => {
        if depth == 0 {
          return Err(DecodeError::new("recursion limit reached"));
        }
        loop {
          let (inner_tag, inner_wire_type) = decode_key(buf)?;
          if inner_wire_type == WireType::EndGroup {
            if inner_tag != tag {
              return Err(DecodeError::new("unexpected end group tag"));
            }
            encode_key(inner_tag, inner_wire_type, &mut self.bytes);
            break;
          }
          self.merge_field(inner_tag, inner_wire_type, buf, depth - 1)?;
        }
      }
      WireType::EndGroup => return Err(DecodeError::new("unexpected end group tag")),
    }
    Ok(())
  }

  fn copy(&mut self, buf: &mut impl Buf, len: u64) -> Result<(), DecodeError> {
    if len > buf.remaining() as u64 {
      return Err(DecodeError::new("buffer underflow"));
    }
    let mut remaining = len as usize;
    while remaining > 0 {
      let chunk = buf.chunk();
      let n = chunk.len().min(remaining);
      self.bytes.extend_from_slice(&chunk[..n]);
      buf.advance(n);
      remaining -= n;
    }
    Ok(())
  }
}

impl std::fmt::Debug for UnknownFields {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("UnknownFields")
      .field("len", &self.bytes.len())
      .finish()
  }
}

/// A partially modelled message that round-trips every field it was decoded
/// with. Derefs to the modelled part.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preserved<M> {
  message: M,
  unknown: UnknownFields,
}

impl<M> Preserved<M> {
  pub fn new(message: M) -> Self {
    Self {
      message,
      unknown: UnknownFields::default(),
    }
  }

  /// Fields carried through untouched.
  pub fn unknown_fields(&self) -> &UnknownFields {
    &self.unknown
  }

  /// The modelled part alone. Unknown fields are discarded.
  pub fn into_inner(self) -> M {
    self.message
  }
}

impl<M> From<M> for Preserved<M> {
  fn from(message: M) -> Self {
    Self::new(message)
  }
}

impl<M> Deref for Preserved<M> {
  type Target = M;

  fn deref(&self) -> &M {
    &self.message
  }
}

impl<M> DerefMut for Preserved<M> {
  fn deref_mut(&mut self) -> &mut M {
    &mut self.message
  }
}

impl<M> Message for Preserved<M>
where
  M: Message + KnownFields,
{
  fn encode_raw(&self, buf: &mut impl BufMut) {
    self.message.encode_raw(buf);
    buf.put_slice(&self.unknown.bytes);
  }

  fn merge_field(
    &mut self,
    tag: u32,
    wire_type: WireType,
    buf: &mut impl Buf,
    ctx: DecodeContext,
  ) -> Result<(), DecodeError> {
    if M::TAGS.contains(&tag) {
      self.message.merge_field(tag, wire_type, buf, ctx)
    } else {
      self
        .unknown
        .merge_field(tag, wire_type, buf, GROUP_DEPTH_LIMIT)
    }
  }

  fn encoded_len(&self) -> usize {
    self.message.encoded_len() + self.unknown.bytes.len()
  }

  fn clear(&mut self) {
    self.message.clear();
    self.unknown.bytes.clear();
  }
}
