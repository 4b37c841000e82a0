/// Scales `number` into `[1, 10)` and returns the power of ten removed.
///
/// Steps by 1e100, 1e10 and 10 so that even subnormals need only a few
/// dozen operations. `number` must be finite and non-zero.
pub(super) fn normalize(number: &mut f64) -> i32 {
    let mut exponent = 0;

    if *number >= 10.0 {
        while *number >= 10.0 {
            if *number >= 1e100 {
                exponent += 100;
                *number /= 1e100;
            } else if *number >= 1e10 {
                exponent += 10;
                *number /= 1e10;
            } else {
                exponent += 1;
                *number /= 10.0;
            }
        }
    } else {
        while *number < 1.0 {
            if *number < 1e-99 {
                exponent -= 100;
                *number *= 1e100;
            } else if *number < 1e-9 {
                exponent -= 10;
                *number *= 1e10;
            } else {
                exponent -= 1;
                *number *= 10.0;
            }
        }

        // the last product may round up to exactly 10
        if *number >= 10.0 {
            exponent += 1;
            *number /= 10.0;
        }
    }

    exponent
}
