//! Dice face rendering to text
//!
//! Each die face is 7x7 pixels and each pixel is two characters wide, so a
//! face row is 14 characters. Dice on the same line are separated by one
//! blank pixel; the last character of every line is the newline.

use crate::dice::DieValue;

/// Pixels per side of a die face
pub const FACE_PIXELS: usize = 7;

/// Characters per pixel, so pixels come out roughly square
pub const PIXEL_CHARS: usize = 2;

/// Characters in one row of one die face
pub const FACE_ROW_LEN: usize = FACE_PIXELS * PIXEL_CHARS;

/// Characters per die per line, including the separating pixel
pub const DIE_ROW_LEN: usize = FACE_ROW_LEN + PIXEL_CHARS;

/// Character used for the body of a die
pub const FACE_CHAR: u8 = b'#';

/// Character used for pips and the gaps between dice
pub const BLANK_CHAR: u8 = b' ';

/// Render one row of a die face.
///
/// Rows 0, 2, 4 and 6 are solid. Rows 1, 3 and 5 carry the pips: row `r`
/// tests bits `3 * (r / 2)` to `3 * (r / 2) + 2` of the pip pattern and
/// blanks pixel column 1, 3 or 5 for each set bit.
///
/// # Examples
///
/// ```
/// use pipdice::dice::DieValue;
/// use pipdice::renderer::render_row;
///
/// let one = DieValue::new(1).unwrap();
/// assert_eq!(render_row(one, 0), "##############");
/// assert_eq!(render_row(one, 3), "######  ######");
/// ```
pub fn render_row(value: DieValue, row: usize) -> String {
    String::from_utf8_lossy(&face_row(value, row)).into_owned()
}

fn face_row(value: DieValue, row: usize) -> [u8; FACE_ROW_LEN] {
    let mut pixels = [FACE_CHAR; FACE_ROW_LEN];

    if row % 2 == 1 && row < FACE_PIXELS {
        let first = (3 * (row / 2)) as u8;
        for (i, column) in [1usize, 3, 5].into_iter().enumerate() {
            if value.has_pip(first + i as u8) {
                let start = column * PIXEL_CHARS;
                pixels[start..start + PIXEL_CHARS].fill(BLANK_CHAR);
            }
        }
    }

    pixels
}

/// Compose the complete output for a roll, row-major.
///
/// The result has `FACE_PIXELS` lines of `DIE_ROW_LEN * values.len()`
/// bytes each, newline included. An empty roll composes to an empty
/// buffer.
pub fn compose(values: &[DieValue]) -> Vec<u8> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut buf = Vec::with_capacity(FACE_PIXELS * DIE_ROW_LEN * values.len());
    for row in 0..FACE_PIXELS {
        for (i, &value) in values.iter().enumerate() {
            buf.extend_from_slice(&face_row(value, row));
            if i + 1 == values.len() {
                buf.extend_from_slice(&[BLANK_CHAR, b'\n']);
            } else {
                buf.extend_from_slice(&[BLANK_CHAR; PIXEL_CHARS]);
            }
        }
    }

    log::debug!("composed {} dice into {} bytes", values.len(), buf.len());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(v: u8) -> DieValue {
        DieValue::new(v).unwrap()
    }

    fn face(v: u8) -> Vec<String> {
        (0..FACE_PIXELS).map(|row| render_row(die(v), row)).collect()
    }

    const SOLID: &str = "##############";

    #[test]
    fn test_face_one() {
        assert_eq!(
            face(1),
            vec![SOLID, SOLID, SOLID, "######  ######", SOLID, SOLID, SOLID]
        );
    }

    #[test]
    fn test_face_two() {
        assert_eq!(
            face(2),
            vec![SOLID, "##########  ##", SOLID, SOLID, SOLID, "##  ##########", SOLID]
        );
    }

    #[test]
    fn test_face_three() {
        assert_eq!(
            face(3),
            vec![
                SOLID,
                "##########  ##",
                SOLID,
                "######  ######",
                SOLID,
                "##  ##########",
                SOLID
            ]
        );
    }

    #[test]
    fn test_face_four() {
        assert_eq!(
            face(4),
            vec![SOLID, "##  ######  ##", SOLID, SOLID, SOLID, "##  ######  ##", SOLID]
        );
    }

    #[test]
    fn test_face_five() {
        assert_eq!(
            face(5),
            vec![
                SOLID,
                "##  ######  ##",
                SOLID,
                "######  ######",
                SOLID,
                "##  ######  ##",
                SOLID
            ]
        );
    }

    #[test]
    fn test_face_six() {
        let pips = "##  ######  ##";
        assert_eq!(face(6), vec![SOLID, pips, SOLID, pips, SOLID, pips, SOLID]);
    }

    #[test]
    fn test_rows_outside_face_are_solid() {
        assert_eq!(render_row(die(6), 7), SOLID);
        assert_eq!(render_row(die(6), 9), SOLID);
    }

    #[test]
    fn test_compose_single_die() {
        let out = String::from_utf8(compose(&[die(1)])).unwrap();
        let expected = "\
############## \n\
############## \n\
############## \n\
######  ###### \n\
############## \n\
############## \n\
############## \n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_compose_separates_dice() {
        let out = String::from_utf8(compose(&[die(2), die(5)])).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "##########  ##  ##  ######  ## ");
        assert_eq!(lines[3], "##############  ######  ###### ");
    }

    #[test]
    fn test_compose_dimensions() {
        for n in 1..=10u8 {
            let values: Vec<DieValue> = (0..n).map(|i| die(i % 6 + 1)).collect();
            let out = compose(&values);
            assert_eq!(out.len(), FACE_PIXELS * DIE_ROW_LEN * usize::from(n));

            let lines: Vec<&[u8]> = out.split_inclusive(|&b| b == b'\n').collect();
            assert_eq!(lines.len(), FACE_PIXELS);
            for line in lines {
                assert_eq!(line.len(), 16 * usize::from(n));
                assert_eq!(line.last(), Some(&b'\n'));
            }
        }
    }

    #[test]
    fn test_same_value_renders_identically() {
        let out = compose(&[die(4), die(4)]);
        for line in out.split(|&b| b == b'\n').filter(|l| !l.is_empty()) {
            assert_eq!(&line[..FACE_ROW_LEN], &line[DIE_ROW_LEN..DIE_ROW_LEN + FACE_ROW_LEN]);
        }
    }

    #[test]
    fn test_compose_empty() {
        assert!(compose(&[]).is_empty());
    }
}
