use crate::analysis::PrincipalStresses;
use crate::StrError;
use plotpy::{Canvas, Curve, Plot};
use std::ffi::OsStr;

const CIRCLE_COLORS: [&str; 3] = ["#1f77b4", "#2ca02c", "#d62728"];
const RANGE_PAD_M: f64 = 0.15;

/// Plots Mohr's circles for a 3D stress state
///
/// Draws the three circles on the (σ, τ) plane with equal axes; the major
/// circle (s1, s3) is drawn first. Degenerate circles (zero radius) show
/// up as points on the normal-stress axis.
pub struct MohrPlot {
    plot: Plot,
}

impl MohrPlot {
    /// Allocates a new instance
    pub fn new() -> Self {
        MohrPlot { plot: Plot::new() }
    }

    /// Draws the three Mohr's circles of a principal-stress triple
    ///
    /// May be called more than once to overlay several stress states.
    pub fn draw(&mut self, stresses: &PrincipalStresses) {
        for (circle, color) in stresses.circles().iter().zip(CIRCLE_COLORS) {
            let mut canvas = Canvas::new();
            canvas.set_face_color("None").set_edge_color(color);
            canvas.draw_circle(circle.center, 0.0, circle.radius);
            self.plot.add(&canvas);
        }

        // mark the principal stresses on the σ axis
        let mut markers = Curve::new();
        markers.set_marker_style("o").set_line_style("None");
        markers.draw(&vec![stresses.s3, stresses.s2, stresses.s1], &vec![0.0, 0.0, 0.0]);
        self.plot.add(&markers);

        // isotropic states have zero-radius circles; pad the view anyway
        let half_span = f64::max(0.5 * (stresses.s1 - stresses.s3), 1.0);
        let pad = RANGE_PAD_M * 2.0 * half_span;
        self.plot
            .set_equal_axes(true)
            .set_range(
                stresses.s3 - pad,
                stresses.s1 + pad,
                -(half_span + pad),
                half_span + pad,
            )
            .grid_and_labels("$\\sigma$", "$\\tau$");
    }

    /// Saves the figure
    ///
    /// # Input
    ///
    /// * `figure_path` -- may be a String, &str, or Path
    pub fn save<S>(&self, figure_path: &S) -> Result<(), StrError>
    where
        S: AsRef<OsStr> + ?Sized,
    {
        self.plot.save(figure_path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MohrPlot;
    use crate::analysis::PrincipalStresses;
    use crate::base::DEFAULT_OUT_DIR;

    const SAVE_FIGURE: bool = false;

    #[test]
    fn draw_works() {
        let ps = PrincipalStresses {
            s1: 30.0,
            s2: 20.0,
            s3: 10.0,
        };
        let mut plot = MohrPlot::new();
        plot.draw(&ps);
        if SAVE_FIGURE {
            let path = format!("{}/test_mohr_plot_draw.png", DEFAULT_OUT_DIR);
            plot.save(&path).unwrap();
        }
    }

    #[test]
    fn draw_handles_degenerate_state() {
        let ps = PrincipalStresses {
            s1: 5.0,
            s2: 5.0,
            s3: 5.0,
        };
        let mut plot = MohrPlot::new();
        plot.draw(&ps);
        if SAVE_FIGURE {
            let path = format!("{}/test_mohr_plot_degenerate.png", DEFAULT_OUT_DIR);
            plot.save(&path).unwrap();
        }
    }
}
