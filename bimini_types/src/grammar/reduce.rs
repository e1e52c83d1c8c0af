use crate::grammar::syntax::{BaseForm, Suffix, TypeExpr};
use crate::types::TypeDescriptor;

/// Folds a parse tree into a descriptor.
///
/// Suffixes wrap the growing descriptor in source order, so the suffix nearest
/// the base form becomes the innermost layer.
pub fn reduce(expr: TypeExpr) -> TypeDescriptor {
    let base = match expr.base {
        BaseForm::Uint(bit_size) => TypeDescriptor::UnsignedInteger(bit_size),
        BaseForm::Scalar(bit_size) => TypeDescriptor::Scalar(bit_size),
        BaseForm::Bit => TypeDescriptor::bit(),
        BaseForm::Bool => TypeDescriptor::bool(),
        BaseForm::Byte => TypeDescriptor::Byte,
        BaseForm::Bytes => TypeDescriptor::Bytes,
        BaseForm::FixedBytes(len) => TypeDescriptor::FixedBytes(len),
        BaseForm::Container(members) => {
            TypeDescriptor::Container(members.into_iter().map(reduce).collect())
        }
    };

    expr.suffixes
        .into_iter()
        .fold(base, |ty, suffix| match suffix {
            Suffix::Optional => TypeDescriptor::optional(ty),
            Suffix::Tuple(len) => TypeDescriptor::Tuple(Box::new(ty), len),
            Suffix::Array => TypeDescriptor::array(ty),
        })
}
