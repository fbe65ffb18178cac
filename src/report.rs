use crate::error::Error;
use crate::rectangle::Rectangle;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// A rectangle together with the values computed from it.
#[derive(Serialize, Debug)]
pub struct Measurement<T> {
    pub rectangle: Rectangle<T>,
    pub area: T,
    pub perimeter: T,
}

impl<T: Clone> Measurement<T> {
    pub fn measure<M, A>(rectangle: Rectangle<T>, mul: M, add: A) -> Measurement<T>
    where
        M: FnMut(T, T) -> T,
        A: FnMut(T, T) -> T,
    {
        let area = rectangle.area(mul);
        let perimeter = rectangle.perimeter(add);
        Measurement {
            rectangle,
            area,
            perimeter,
        }
    }
}

fn fmt_value<T: Display>(value: &T, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

pub fn write_text<W, T>(
    out: &mut W,
    index: usize,
    measurement: &Measurement<T>,
    precision: Option<usize>,
) -> Result<(), Error>
where
    W: Write,
    T: Display,
{
    writeln!(out, "Rectangle {}: {}", index, measurement.rectangle)?;
    writeln!(out, "Area: {}", fmt_value(&measurement.area, precision))?;
    writeln!(
        out,
        "Perimeter: {}",
        fmt_value(&measurement.perimeter, precision)
    )?;
    Ok(())
}

/// Writes `measurements` as a pretty JSON document. Pass a tuple to mix
/// instantiations; it serializes as an array.
pub fn write_json<W, S>(out: &mut W, measurements: &S) -> Result<(), Error>
where
    W: Write,
    S: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, measurements)?;
    writeln!(out)?;
    Ok(())
}
