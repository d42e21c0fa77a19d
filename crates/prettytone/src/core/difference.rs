use crate::Float;

/// Compute Delta E for Oklab or Oklrab.
///
/// Since both color spaces are perceptually uniform and use Cartesian
/// coordinates, the color difference is the Euclidian distance.
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [l1, a1, b1] = coordinates1;
    let [l2, a2, b2] = coordinates2;

    let dl = l1 - l2;
    let da = a1 - a2;
    let db = b1 - b2;

    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

#[cfg(test)]
mod test {
    use super::delta_e_ok;

    #[test]
    fn test_delta_e_ok() {
        assert_eq!(delta_e_ok(&[0.5, 0.1, -0.1], &[0.5, 0.1, -0.1]), 0.0);
        let d = delta_e_ok(&[0.0, 0.0, 0.0], &[0.0, 0.3, 0.4]);
        assert!((d - 0.5).abs() < 1e-12, "distance should be 0.5 but is {}", d);
    }
}
