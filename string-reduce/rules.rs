//! The string package's reducers.
//!
//! Each reducer receives an `Apply` node whose children are already
//! reduced. Argument checks report the offending child through the error
//! path, so the host can flag exactly that node.

use formulae_string_core::{
  Error as TextError,
  Needle,
  Operand,
  Pattern,
  Text,
  codepoint,
  compare,
  replace,
  search,
  split::{
    self,
    SplitBy,
  },
  substring,
  transform,
};

use crate::{
  edit::convert_kind,
  error::{
    EditError,
    Expected,
    ReduceError,
  },
  expr::{
    Expr,
    TextKind,
  },
  registry::{
    ReduceResult,
    ReducerRegistry,
    Reduction,
  },
  tag::Tag,
};

pub fn register(registry: &mut ReducerRegistry) {
  registry.add(Tag::Concatenation, concatenation);

  for tag in [
    Tag::Length,
    Tag::Uppercase,
    Tag::Lowercase,
    Tag::Trim,
    Tag::Reverse,
  ] {
    registry.add(tag, string_function);
  }

  for tag in [Tag::StartsWith, Tag::EndsWith, Tag::Index, Tag::Indexes] {
    registry.add(tag, string_string_function);
  }

  registry.add(Tag::Contains, contains);
  registry.add(Tag::Matches, matches);
  registry.add(Tag::Replace, replacement);
  registry.add(Tag::ReplaceAll, replacement);
  registry.add(Tag::Split, split);

  for tag in [Tag::Substring, Tag::SubstringToPos, Tag::SubstringToN] {
    registry.add(tag, substring);
  }

  registry.add(Tag::Compare, compare);

  registry.add(Tag::ToString, list_to_string);
  for tag in [
    Tag::ToString,
    Tag::ToText,
    Tag::ToRegularExpression,
    Tag::ToPassword,
  ] {
    registry.add(tag, convert);
  }

  registry.add(Tag::Encode, encode);
  registry.add(Tag::Decode, decode);
}

fn parts(expr: &Expr) -> Option<(Tag, &[Expr])> {
  match expr {
    Expr::Apply { tag, children } => Some((*tag, children)),
    _ => None,
  }
}

fn replace_with(expr: Expr) -> ReduceResult {
  Ok(Reduction::Replace(expr))
}

fn boolean(value: bool) -> ReduceResult {
  replace_with(Expr::Bool(value))
}

fn integer(n: usize) -> Expr {
  Expr::integer(n as i64)
}

fn string_list(segments: Vec<Text>) -> Expr {
  Expr::list(segments.into_iter().map(Expr::string))
}

fn string_arg(children: &[Expr], index: usize) -> Result<&Text, ReduceError> {
  children
    .get(index)
    .and_then(|child| child.text_of(TextKind::String))
    .ok_or_else(|| ReduceError::type_mismatch(&[index], Expected::String))
}

fn integer_arg(children: &[Expr], index: usize) -> Result<i64, ReduceError> {
  children
    .get(index)
    .and_then(Expr::as_integer)
    .ok_or_else(|| ReduceError::type_mismatch(&[index], Expected::Integer))
}

fn pattern_arg(children: &[Expr], index: usize) -> Result<Pattern, ReduceError> {
  let source = children
    .get(index)
    .and_then(|child| child.text_of(TextKind::RegularExpression))
    .ok_or_else(|| ReduceError::type_mismatch(&[index], Expected::RegularExpression))?;
  Pattern::new(source.clone()).map_err(|err| ReduceError::invalid_value(&[index], err))
}

/// A string is searched for literally, a regular expression as a pattern.
fn needle_arg(children: &[Expr], index: usize) -> Result<Needle, ReduceError> {
  match children.get(index).and_then(Expr::text_kind) {
    Some(TextKind::String) => Ok(Needle::Literal(string_arg(children, index)?.clone())),
    Some(TextKind::RegularExpression) => pattern_arg(children, index).map(Needle::Pattern),
    _ => {
      Err(ReduceError::type_mismatch(
        &[index],
        Expected::StringOrRegularExpression,
      ))
    },
  }
}

fn concatenation(expr: &Expr) -> ReduceResult {
  let Some((_, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };

  let values = (0..children.len())
    .map(|index| string_arg(children, index))
    .collect::<Result<Vec<_>, _>>()?;
  replace_with(Expr::string(transform::concat(values)))
}

fn string_function(expr: &Expr) -> ReduceResult {
  let Some((tag, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;

  let result = match tag {
    Tag::Length => integer(transform::length(value)),
    Tag::Uppercase => Expr::string(transform::to_upper_case(value)),
    Tag::Lowercase => Expr::string(transform::to_lower_case(value)),
    Tag::Trim => Expr::string(transform::trim(value)),
    Tag::Reverse => Expr::string(transform::reverse(value)),
    _ => return Ok(Reduction::Continue),
  };
  replace_with(result)
}

fn string_string_function(expr: &Expr) -> ReduceResult {
  let Some((tag, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;
  let other = string_arg(children, 1)?;

  match tag {
    Tag::StartsWith => boolean(search::starts_with(value, other)),
    Tag::EndsWith => boolean(search::ends_with(value, other)),
    Tag::Index => replace_with(integer(search::index_of(value, other))),
    Tag::Indexes => {
      replace_with(Expr::list(
        search::all_indexes_of(value, other)
          .into_iter()
          .map(integer),
      ))
    },
    _ => Ok(Reduction::Continue),
  }
}

fn contains(expr: &Expr) -> ReduceResult {
  let Some((_, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;
  let needle = needle_arg(children, 1)?;
  boolean(search::contains(value, &needle))
}

fn matches(expr: &Expr) -> ReduceResult {
  let Some((_, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;
  let pattern = pattern_arg(children, 1)?;
  boolean(search::matches(value, &pattern))
}

fn replacement(expr: &Expr) -> ReduceResult {
  let Some((tag, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;
  let needle = needle_arg(children, 1)?;
  let with = string_arg(children, 2)?;

  let result = if tag == Tag::Replace {
    replace::replace_first(value, &needle, with)
  } else {
    replace::replace_all(value, &needle, with)
  };
  replace_with(Expr::string(result))
}

fn split(expr: &Expr) -> ReduceResult {
  let Some((_, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;

  let Some(spec) = children.get(1) else {
    return split_with(value, SplitBy::Chunks(1));
  };

  match spec {
    Expr::Number(number) => {
      let size = number
        .as_integer()
        .ok_or_else(|| ReduceError::type_mismatch(&[1], Expected::Integer))?;
      split_with(value, SplitBy::Chunks(size))
    },
    Expr::Text {
      kind: TextKind::String | TextKind::RegularExpression,
      ..
    } => {
      let needle = needle_arg(children, 1)?;
      split_with(value, SplitBy::Needle(&needle))
    },
    Expr::List(items) => {
      let cuts = items
        .iter()
        .enumerate()
        .map(|(slot, item)| {
          item
            .as_integer()
            .ok_or_else(|| ReduceError::type_mismatch(&[1, slot], Expected::Integer))
        })
        .collect::<Result<Vec<_>, _>>()?;
      split_with(value, SplitBy::Cuts(&cuts))
    },
    _ => Ok(Reduction::Continue),
  }
}

fn split_with(value: &Text, by: SplitBy<'_>) -> ReduceResult {
  let segments = split::split(value, by).map_err(|err| {
    match err.operand() {
      Operand::Cut(slot) => ReduceError::invalid_value(&[1, slot], err),
      _ => ReduceError::invalid_value(&[1], err),
    }
  })?;
  replace_with(string_list(segments))
}

fn substring(expr: &Expr) -> ReduceResult {
  let Some((tag, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;
  let pos = integer_arg(children, 1)?;

  let result = match tag {
    Tag::Substring => substring::substring(value, pos),
    Tag::SubstringToPos => substring::substring_to_pos(value, pos, integer_arg(children, 2)?),
    Tag::SubstringToN => substring::substring_to_n(value, pos, integer_arg(children, 2)?),
    _ => return Ok(Reduction::Continue),
  };

  let result = result.map_err(|err| {
    let child = match err.operand() {
      Operand::End | Operand::Count => 2,
      _ => 1,
    };
    ReduceError::invalid_value(&[child], err)
  })?;
  replace_with(Expr::string(result))
}

fn compare(expr: &Expr) -> ReduceResult {
  let Some((_, [left, right])) = parts(expr) else {
    return Ok(Reduction::Continue);
  };

  let comparable = |expr: &Expr| {
    matches!(
      expr.text_kind(),
      Some(TextKind::String | TextKind::Text | TextKind::RegularExpression)
    )
  };
  if !comparable(left) || !comparable(right) {
    return Ok(Reduction::Continue);
  }

  match (left.text_value(), right.text_value()) {
    (Some(a), Some(b)) => replace_with(Expr::Comparison(compare::compare(a, b))),
    _ => Ok(Reduction::Continue),
  }
}

fn list_to_string(expr: &Expr) -> ReduceResult {
  let Some((_, [Expr::List(items)])) = parts(expr) else {
    return Ok(Reduction::Continue);
  };

  let values = items
    .iter()
    .enumerate()
    .map(|(slot, item)| {
      item
        .text_of(TextKind::String)
        .ok_or_else(|| ReduceError::type_mismatch(&[0, slot], Expected::String))
    })
    .collect::<Result<Vec<_>, _>>()?;
  replace_with(Expr::string(transform::concat(values)))
}

fn convert(expr: &Expr) -> ReduceResult {
  let Some((tag, [argument])) = parts(expr) else {
    return Ok(Reduction::Continue);
  };

  let kind = match tag {
    Tag::ToString => TextKind::String,
    Tag::ToText => TextKind::Text,
    Tag::ToRegularExpression => TextKind::RegularExpression,
    Tag::ToPassword => TextKind::Password,
    _ => return Ok(Reduction::Continue),
  };

  match convert_kind(argument, kind) {
    Ok(Some(converted)) => replace_with(converted),
    Ok(None) => Ok(Reduction::Continue),
    Err(EditError::Pattern(err)) => Err(ReduceError::invalid_value(&[0], err)),
    Err(EditError::Url(_)) => Ok(Reduction::Continue),
  }
}

fn encode(expr: &Expr) -> ReduceResult {
  let Some((_, [argument])) = parts(expr) else {
    return Ok(Reduction::Continue);
  };

  let (code_points, in_list) = match argument {
    Expr::Number(number) => {
      let n = number
        .as_integer()
        .ok_or_else(|| ReduceError::type_mismatch(&[0], Expected::IntegerOrList))?;
      if n <= 0 {
        return Err(ReduceError::invalid_value(&[0], TextError::InvalidArgument {
          operand: Operand::CodePoint(0),
          value:   n,
          reason:  "code point must be a positive integer",
        }));
      }
      (vec![n], false)
    },
    Expr::List(items) => {
      let values = items
        .iter()
        .enumerate()
        .map(|(slot, item)| {
          item
            .as_integer()
            .ok_or_else(|| ReduceError::type_mismatch(&[0, slot], Expected::Integer))
        })
        .collect::<Result<Vec<_>, _>>()?;
      (values, true)
    },
    _ => return Err(ReduceError::type_mismatch(&[0], Expected::IntegerOrList)),
  };

  let text = codepoint::encode(&code_points).map_err(|err: TextError| {
    match err.operand() {
      Operand::CodePoint(slot) if in_list => ReduceError::invalid_value(&[0, slot], err),
      _ => ReduceError::invalid_value(&[0], err),
    }
  })?;
  replace_with(Expr::string(text))
}

fn decode(expr: &Expr) -> ReduceResult {
  let Some((_, children)) = parts(expr) else {
    return Ok(Reduction::Continue);
  };
  let value = string_arg(children, 0)?;

  replace_with(Expr::list(
    codepoint::decode(value)
      .into_iter()
      .map(|code_point| Expr::integer(i64::from(code_point))),
  ))
}
