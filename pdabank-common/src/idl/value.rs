use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use super::types::{IdlField, IdlType, IdlTypeDefTy, PrimitiveType};
use super::Idl;
use crate::errors::BankError;

/// A Borsh value shaped by an IDL type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdlValue {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    U128(u128),
    I128(i128),
    String(String),
    PublicKey(Pubkey),
    Bytes(Vec<u8>),
    Option(Option<Box<IdlValue>>),
    Vec(Vec<IdlValue>),
    Struct(Vec<(String, IdlValue)>),
}

impl IdlValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IdlValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            IdlValue::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pubkey(&self) -> Option<Pubkey> {
        match self {
            IdlValue::PublicKey(k) => Some(*k),
            _ => None,
        }
    }

    /// Field of a decoded struct, by name.
    pub fn field(&self, name: &str) -> Option<&IdlValue> {
        match self {
            IdlValue::Struct(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Encodes `args` against the IDL argument list, in order.
pub fn encode_args(
    fields: &[IdlField],
    args: &[(&str, IdlValue)],
    idl: &Idl,
    out: &mut Vec<u8>,
) -> Result<(), BankError> {
    if fields.len() != args.len() {
        return Err(BankError::ArgumentMismatch(format!(
            "expected {} arguments, got {}",
            fields.len(),
            args.len()
        )));
    }
    for (field, (name, value)) in fields.iter().zip(args) {
        if field.name != *name {
            return Err(BankError::ArgumentMismatch(format!(
                "expected argument `{}`, got `{}`",
                field.name, name
            )));
        }
        encode(&field.ty, value, idl, out)?;
    }
    Ok(())
}

pub fn encode(ty: &IdlType, value: &IdlValue, idl: &Idl, out: &mut Vec<u8>) -> Result<(), BankError> {
    match (ty, value) {
        (IdlType::Primitive(p), v) => encode_primitive(*p, v, out),
        (IdlType::Option { option }, IdlValue::Option(inner)) => match inner {
            None => {
                out.push(0);
                Ok(())
            }
            Some(v) => {
                out.push(1);
                encode(option, v, idl, out)
            }
        },
        (IdlType::Vec { vec }, IdlValue::Vec(items)) => {
            (items.len() as u32).serialize(out)?;
            items.iter().try_for_each(|item| encode(vec, item, idl, out))
        }
        (IdlType::Array { array: (inner, len) }, IdlValue::Vec(items)) => {
            if items.len() != *len {
                return Err(mismatch(ty, value));
            }
            items.iter().try_for_each(|item| encode(inner, item, idl, out))
        }
        (IdlType::Defined { defined }, IdlValue::Struct(values)) => {
            let fields = struct_fields(idl, defined)?;
            let args: Vec<(&str, IdlValue)> =
                values.iter().map(|(n, v)| (n.as_str(), v.clone())).collect();
            encode_args(fields, &args, idl, out)
        }
        _ => Err(mismatch(ty, value)),
    }
}

fn encode_primitive(ty: PrimitiveType, value: &IdlValue, out: &mut Vec<u8>) -> Result<(), BankError> {
    match (ty, value) {
        (PrimitiveType::Bool, IdlValue::Bool(v)) => v.serialize(out)?,
        (PrimitiveType::U8, IdlValue::U8(v)) => v.serialize(out)?,
        (PrimitiveType::I8, IdlValue::I8(v)) => v.serialize(out)?,
        (PrimitiveType::U16, IdlValue::U16(v)) => v.serialize(out)?,
        (PrimitiveType::I16, IdlValue::I16(v)) => v.serialize(out)?,
        (PrimitiveType::U32, IdlValue::U32(v)) => v.serialize(out)?,
        (PrimitiveType::I32, IdlValue::I32(v)) => v.serialize(out)?,
        (PrimitiveType::U64, IdlValue::U64(v)) => v.serialize(out)?,
        (PrimitiveType::I64, IdlValue::I64(v)) => v.serialize(out)?,
        (PrimitiveType::U128, IdlValue::U128(v)) => v.serialize(out)?,
        (PrimitiveType::I128, IdlValue::I128(v)) => v.serialize(out)?,
        (PrimitiveType::String, IdlValue::String(v)) => v.serialize(out)?,
        (PrimitiveType::PublicKey, IdlValue::PublicKey(v)) => v.to_bytes().serialize(out)?,
        (PrimitiveType::Bytes, IdlValue::Bytes(v)) => v.serialize(out)?,
        _ => return Err(mismatch(&IdlType::Primitive(ty), value)),
    }
    Ok(())
}

/// Decodes one value of type `ty`, advancing `buf`.
pub fn decode(ty: &IdlType, buf: &mut &[u8], idl: &Idl) -> Result<IdlValue, BankError> {
    match ty {
        IdlType::Primitive(p) => decode_primitive(*p, buf),
        IdlType::Option { option } => match read::<u8>(buf)? {
            0 => Ok(IdlValue::Option(None)),
            1 => Ok(IdlValue::Option(Some(Box::new(decode(option, buf, idl)?)))),
            tag => Err(BankError::Decode(format!("invalid option tag {}", tag))),
        },
        IdlType::Vec { vec } => {
            let len = read::<u32>(buf)? as usize;
            // Every element takes at least one byte.
            if len > buf.len() {
                return Err(BankError::Decode(format!("vec length {} exceeds remaining data", len)));
            }
            let items = (0..len).map(|_| decode(vec, buf, idl)).collect::<Result<_, _>>()?;
            Ok(IdlValue::Vec(items))
        }
        IdlType::Array { array: (inner, len) } => {
            let items = (0..*len).map(|_| decode(inner, buf, idl)).collect::<Result<_, _>>()?;
            Ok(IdlValue::Vec(items))
        }
        IdlType::Defined { defined } => decode_struct(struct_fields(idl, defined)?, buf, idl),
    }
}

pub fn decode_struct(fields: &[IdlField], buf: &mut &[u8], idl: &Idl) -> Result<IdlValue, BankError> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        values.push((field.name.clone(), decode(&field.ty, buf, idl)?));
    }
    Ok(IdlValue::Struct(values))
}

fn decode_primitive(ty: PrimitiveType, buf: &mut &[u8]) -> Result<IdlValue, BankError> {
    Ok(match ty {
        PrimitiveType::Bool => IdlValue::Bool(read(buf)?),
        PrimitiveType::U8 => IdlValue::U8(read(buf)?),
        PrimitiveType::I8 => IdlValue::I8(read(buf)?),
        PrimitiveType::U16 => IdlValue::U16(read(buf)?),
        PrimitiveType::I16 => IdlValue::I16(read(buf)?),
        PrimitiveType::U32 => IdlValue::U32(read(buf)?),
        PrimitiveType::I32 => IdlValue::I32(read(buf)?),
        PrimitiveType::U64 => IdlValue::U64(read(buf)?),
        PrimitiveType::I64 => IdlValue::I64(read(buf)?),
        PrimitiveType::U128 => IdlValue::U128(read(buf)?),
        PrimitiveType::I128 => IdlValue::I128(read(buf)?),
        PrimitiveType::String => IdlValue::String(read(buf)?),
        PrimitiveType::PublicKey => IdlValue::PublicKey(Pubkey::new_from_array(read(buf)?)),
        PrimitiveType::Bytes => IdlValue::Bytes(read(buf)?),
    })
}

fn read<T: BorshDeserialize>(buf: &mut &[u8]) -> Result<T, BankError> {
    T::deserialize(buf).map_err(|e| BankError::Decode(e.to_string()))
}

fn struct_fields<'a>(idl: &'a Idl, name: &str) -> Result<&'a [IdlField], BankError> {
    match idl.type_def(name).map(|def| &def.ty) {
        Some(IdlTypeDefTy::Struct { fields }) => Ok(fields),
        Some(IdlTypeDefTy::Enum { .. }) => Err(BankError::UnsupportedType(format!("enum {}", name))),
        None => Err(BankError::UnsupportedType(format!("undefined type {}", name))),
    }
}

fn mismatch(ty: &IdlType, value: &IdlValue) -> BankError {
    BankError::ArgumentMismatch(format!("value {:?} does not match type {}", value, ty))
}
