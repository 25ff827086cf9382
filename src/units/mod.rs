//! 입력 단위 정의 및 내부 기준 단위(m, mm²) 환산.

pub mod area;
pub mod length;

pub use area::{to_square_millimeter, AreaUnit};
pub use length::{to_meter, LengthUnit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_and_kilometers_to_meter() {
        assert!((to_meter(100.0, LengthUnit::Foot) - 30.48).abs() < 1e-9);
        assert!((to_meter(0.02, LengthUnit::Kilometer) - 20.0).abs() < 1e-9);
        assert_eq!(to_meter(20.0, LengthUnit::Meter), 20.0);
    }

    #[test]
    fn kcmil_to_square_millimeter() {
        // 250 kcmil ≈ 126.7 mm²
        let mm2 = to_square_millimeter(250.0, AreaUnit::Kcmil);
        assert!((mm2 - 126.68).abs() < 0.01, "mm2={mm2}");
    }

    #[test]
    fn unit_symbols_parse_back() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.symbol().parse::<LengthUnit>(), Ok(unit));
        }
        for unit in AreaUnit::ALL {
            assert_eq!(unit.symbol().parse::<AreaUnit>(), Ok(unit));
        }
    }
}
