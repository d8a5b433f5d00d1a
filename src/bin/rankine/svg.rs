//! SVG rendering of a T-s diagram.

use plotters::prelude::*;
use rankine_models::models::power::rankine::{Diagram, TsPoint};
use uom::si::{
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::error::CliResult;

const SIZE: (u32, u32) = (800, 600);

/// Draws the dome lines, the cycle polygon, and the labeled markers.
pub fn render(diagram: &Diagram) -> CliResult<String> {
    let frame = Frame::enclosing(
        diagram
            .liquid_line
            .iter()
            .chain(&diagram.vapor_line)
            .chain(&diagram.path.polygon),
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(frame.s_min..frame.s_max, frame.t_min..frame.t_max)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("s (kJ/kg K)")
            .y_desc("T (degC)")
            .draw()?;

        chart.draw_series(LineSeries::new(
            diagram.liquid_line.iter().map(coordinates),
            &RED,
        ))?;
        chart.draw_series(LineSeries::new(
            diagram.vapor_line.iter().map(coordinates),
            &BLUE,
        ))?;
        chart.draw_series(LineSeries::new(
            diagram.path.polygon.iter().map(coordinates),
            BLACK.stroke_width(2),
        ))?;

        chart.draw_series(diagram.path.markers.iter().map(|marker| {
            EmptyElement::at(coordinates(&marker.point))
                + Circle::new((0, 0), 3, BLACK.filled())
                + Text::new(
                    format!("({})", marker.label),
                    (6, -16),
                    ("sans-serif", 12).into_font(),
                )
        }))?;

        root.present()?;
    }

    Ok(svg)
}

/// Data bounds in kJ/kg·K and °C.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    s_min: f64,
    s_max: f64,
    t_min: f64,
    t_max: f64,
}

impl Frame {
    fn enclosing<'a>(points: impl Iterator<Item = &'a TsPoint>) -> Self {
        let mut frame = Self {
            s_min: f64::INFINITY,
            s_max: f64::NEG_INFINITY,
            t_min: f64::INFINITY,
            t_max: f64::NEG_INFINITY,
        };
        for point in points {
            let (s, t) = coordinates(point);
            frame.s_min = frame.s_min.min(s);
            frame.s_max = frame.s_max.max(s);
            frame.t_min = frame.t_min.min(t);
            frame.t_max = frame.t_max.max(t);
        }

        // Empty or single-valued input still gets a drawable range.
        if !(frame.s_max > frame.s_min) {
            frame.s_min = 0.0;
            frame.s_max = frame.s_max.max(1.0);
        }
        if !(frame.t_max > frame.t_min) {
            frame.t_min = 0.0;
            frame.t_max = frame.t_max.max(100.0);
        }
        frame
    }
}

fn coordinates(point: &TsPoint) -> (f64, f64) {
    (
        point.entropy.get::<kilojoule_per_kilogram_kelvin>(),
        point.temperature.get::<degree_celsius>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use rankine_models::{
        models::power::rankine::{CycleDiagram, DiagramConfig, SuperheatBoundary, SuperheatRankine},
        support::steam::If97,
    };
    use twine_core::Model;

    #[test]
    fn superheat_diagram_has_dome_path_and_labels() {
        let result = SuperheatRankine::new(If97)
            .call(&SuperheatBoundary::default())
            .unwrap();
        let diagram = CycleDiagram::new(If97, DiagramConfig::default())
            .call(&result)
            .unwrap();
        let svg = render(&diagram).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.matches("<polyline").count() >= 3);
        assert_eq!(svg.matches("<circle").count(), diagram.path.markers.len());
        assert!(svg.contains("(1)"));
        assert!(svg.contains("(4)"));
    }

    #[test]
    fn frame_encloses_points() {
        let frame = Frame::enclosing(std::iter::empty());
        assert!(frame.s_max > frame.s_min);
        assert!(frame.t_max > frame.t_min);
    }
}
