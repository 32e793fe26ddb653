use lexical_core::WriteFloatOptions;

use crate::error::{WktError, WktResult};

const FORMAT: u128 = lexical_core::format::STANDARD;

/// Shortest round-trip digits, with `1.0` written as `1`.
const OPTIONS: WriteFloatOptions = match WriteFloatOptions::builder().trim_floats(true).build() {
    Ok(options) => options,
    Err(_) => panic!("invalid float write options"),
};

/// Encode the ordinates of a single position, separated by one space.
///
/// A written position always has 2 to 4 finite ordinates.
pub(crate) fn encode_point(position: &[f64], out: &mut String) -> WktResult<()> {
    if !(2..=4).contains(&position.len()) {
        return Err(WktError::InvalidRecord(format!(
            "position needs 2 to 4 ordinates, found {}",
            position.len()
        )));
    }

    let num_ordinates = position.len();
    for (idx, ordinate) in position.iter().enumerate() {
        encode_ordinate(*ordinate, out)?;
        if idx < num_ordinates - 1 {
            out.push(' ');
        }
    }
    Ok(())
}

fn encode_ordinate(ordinate: f64, out: &mut String) -> WktResult<()> {
    if !ordinate.is_finite() {
        return Err(WktError::InvalidRecord(format!(
            "non-finite ordinate {ordinate}"
        )));
    }

    let mut buffer = [0u8; lexical_core::BUFFER_SIZE];
    let digits = lexical_core::write_with_options::<_, FORMAT>(ordinate, &mut buffer, &OPTIONS);
    // Only ASCII is written.
    out.extend(digits.iter().map(|byte| char::from(*byte)));
    Ok(())
}
