use crate::{
    error::MalformedSignature,
    signature::{Argument, MethodSignature},
};
use nom::{
    bytes::complete::take_till,
    character::complete::{char, one_of},
    combinator::{all_consuming, opt, rest},
    multi::separated_list1,
    sequence::preceded,
    Finish, IResult,
};
use tracing::{debug, trace};

type Input<'a> = &'a str;

/// Parses a Java-like method signature such as
/// `public Vector3 distort(int x, int y, float magnitude)`.
///
/// The access modifier is optional. Tokens are separated by exactly one
/// space; anything after the closing parenthesis is ignored.
pub fn signature(input: Input) -> Result<MethodSignature, MalformedSignature> {
    let (_, (header, arguments)) = sections(input)
        .finish()
        .map_err(|_| MalformedSignature::Header(input.to_owned()))?;
    trace!(header, arguments, "split signature at parentheses");

    let arguments = argument_list(arguments).inspect_err(|err| {
        debug!(text = err.text(), "rejected argument");
    })?;
    let (access_modifier, return_type, name) =
        method_header(header).inspect_err(|err| {
            debug!(text = err.text(), "rejected method header");
        })?;

    Ok(MethodSignature::new(
        access_modifier,
        return_type,
        name,
        arguments,
    ))
}

fn is_parenthesis(c: char) -> bool {
    matches!(c, '(' | ')')
}

// Either parenthesis ends a section, so `f)x(` yields the header `f` and the
// arguments `x`, and a nested `((` leaves the arguments empty.
fn sections(input: Input) -> IResult<Input, (Input, Input)> {
    let (input, header) = take_till(is_parenthesis)(input)?;
    let (input, arguments) =
        opt(preceded(one_of("()"), take_till(is_parenthesis)))(input)?;
    let (input, _) = rest(input)?;
    Ok((input, (header, arguments.unwrap_or_default())))
}

/// Every piece between single occurrences of `separator`, empty ones
/// included.
fn words<'a>(
    separator: char,
) -> impl FnMut(Input<'a>) -> IResult<Input<'a>, Vec<Input<'a>>> {
    all_consuming(separated_list1(
        char(separator),
        take_till(move |c: char| c == separator),
    ))
}

fn argument_list(input: Input) -> Result<Vec<Argument>, MalformedSignature> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let (_, pieces) = words(',')(input)
        .finish()
        .map_err(|_| MalformedSignature::Argument(input.to_owned()))?;
    pieces
        .into_iter()
        .map(|piece| argument(piece.trim()))
        .collect()
}

fn argument(input: Input) -> Result<Argument, MalformedSignature> {
    let malformed = || MalformedSignature::Argument(input.to_owned());
    let (_, parts) = words(' ')(input).finish().map_err(|_| malformed())?;
    match parts.as_slice() {
        [typ, name] if !typ.is_empty() && !name.is_empty() => {
            Ok(Argument::new(*typ, *name))
        }
        _ => Err(malformed()),
    }
}

fn method_header(
    input: Input,
) -> Result<(Option<String>, String, String), MalformedSignature> {
    let malformed = || MalformedSignature::Header(input.to_owned());
    let (_, mut parts) = words(' ')(input).finish().map_err(|_| malformed())?;
    // A space before the opening parenthesis is allowed.
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    if parts.iter().any(|part| part.is_empty()) {
        return Err(malformed());
    }
    match parts.as_slice() {
        [return_type, name] => {
            Ok((None, (*return_type).to_owned(), (*name).to_owned()))
        }
        [access_modifier, return_type, name] => Ok((
            Some((*access_modifier).to_owned()),
            (*return_type).to_owned(),
            (*name).to_owned(),
        )),
        _ => Err(malformed()),
    }
}
