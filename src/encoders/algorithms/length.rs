use num_bigint::BigUint;

/// Maximum number of base-`to` digits needed for any number written with `n`
/// base-`from` digits.
///
/// This is `ceil(n * log(from) / log(to))`, i.e. the smallest `k` with
/// `to^k >= from^n`. The floating-point estimate is corrected against exact
/// integer powers, so it is neither short at exact powers nor padded. The
/// result is never less than 1, since zero still renders as one digit.
///
/// Both radixes must be at least 2.
pub fn estimate_length(from: u32, to: u32, n: usize) -> usize {
    debug_assert!(from >= 2 && to >= 2, "radix below 2");
    if n == 0 {
        return 1;
    }

    let ratio = f64::from(from).ln() / f64::from(to).ln();
    let estimate = (n as f64 * ratio).ceil() as usize;

    let Ok(exponent) = u32::try_from(n) else {
        // too large to check exactly; one spare digit covers float error
        return estimate + 1;
    };
    let Ok(mut k) = u32::try_from(estimate.max(1)) else {
        return estimate + 1;
    };

    let limit = BigUint::from(from).pow(exponent);
    let to_big = BigUint::from(to);
    let mut capacity = to_big.pow(k);

    while capacity < limit {
        capacity *= &to_big;
        k += 1;
    }
    while k > 1 {
        let smaller = &capacity / &to_big;
        if smaller < limit {
            break;
        }
        capacity = smaller;
        k -= 1;
    }

    if k as usize != estimate {
        log::trace!(
            "length estimate for {} base-{} digit(s) in base {} corrected from {} to {}",
            n,
            from,
            to,
            estimate,
            k
        );
    }
    k as usize
}
