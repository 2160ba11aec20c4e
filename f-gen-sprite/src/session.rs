use std::error::Error;

use image::RgbaImage;

use fishtank_core::classifier::{ClassifyFn, Verdict};
use fishtank_core::tank::Tank;

use crate::extractor;
use crate::preprocess;

/// Per-user context: the live tank and the classifier handle, for the
/// lifetime of one drawing session. The last verdict is retained so a UI
/// can keep showing it between submissions.
pub struct Session {
    tank: Tank,
    classifier: Option<ClassifyFn>,
    last_verdict: Option<Verdict>,
}

/// What happened to one submitted drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// No ink on the canvas (or nothing extractable); nothing to add, the
    /// user should redraw.
    EmptyCanvas,
    /// No model handle; classification is unusable for this session.
    ClassifierUnavailable,
    Rejected {
        confidence: f32,
    },
    Accepted {
        confidence: f32,
        fish_count: usize,
    },
}

impl Session {
    /// A session without a model handle; every submission reports
    /// `ClassifierUnavailable` until one is attached.
    pub fn new(tank_width: u32, tank_height: u32) -> Self {
        Self {
            tank: Tank::new(tank_width, tank_height),
            classifier: None,
            last_verdict: None,
        }
    }

    pub fn with_classifier(tank_width: u32, tank_height: u32, classifier: ClassifyFn) -> Self {
        Self {
            tank: Tank::new(tank_width, tank_height),
            classifier: Some(classifier),
            last_verdict: None,
        }
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// Run one drawing through the full flow: derive the classifier input,
    /// classify, and on acceptance extract the sprite and admit it into the
    /// tank. Only the sprite encoding step can genuinely fail; everything
    /// else degrades to an explicit outcome.
    pub fn submit(&mut self, canvas: &RgbaImage) -> Result<SubmitOutcome, Box<dyn Error>> {
        let Some(classifier) = self.classifier.as_ref() else {
            return Ok(SubmitOutcome::ClassifierUnavailable);
        };

        let glyph = preprocess::glyph_from_canvas(canvas);
        let verdict = classifier(&glyph);
        self.last_verdict = Some(verdict);

        if !verdict.is_fish {
            log::info!(
                "drawing rejected at confidence {:.2}",
                verdict.confidence
            );
            return Ok(SubmitOutcome::Rejected {
                confidence: verdict.confidence,
            });
        }

        let Some(sprite) = extractor::extract(canvas) else {
            return Ok(SubmitOutcome::EmptyCanvas);
        };
        self.tank.add_fish(sprite.encode_pair()?);

        Ok(SubmitOutcome::Accepted {
            confidence: verdict.confidence,
            fish_count: self.tank.fish_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn accept_all() -> ClassifyFn {
        Box::new(|_| Verdict::from_confidence(1.0))
    }

    fn reject_all() -> ClassifyFn {
        Box::new(|_| Verdict::from_confidence(0.1))
    }

    fn drawn_canvas() -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 0]));
        for y in 80..120 {
            for x in 60..140 {
                canvas.put_pixel(x, y, Rgba([20, 20, 160, 255]));
            }
        }
        canvas
    }

    fn blank_canvas() -> RgbaImage {
        RgbaImage::from_pixel(200, 200, Rgba([255, 255, 255, 0]))
    }

    #[test]
    fn missing_classifier_is_reported_as_unusable() {
        let mut session = Session::new(560, 560);
        let outcome = session.submit(&drawn_canvas()).unwrap();
        assert_eq!(outcome, SubmitOutcome::ClassifierUnavailable);
        assert!(session.tank().is_empty());
    }

    #[test]
    fn accepted_drawing_grows_the_tank() {
        let mut session = Session::with_classifier(560, 560, accept_all());
        let outcome = session.submit(&drawn_canvas()).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                confidence: 1.0,
                fish_count: 1
            }
        );
        assert_eq!(session.tank().fish_count(), 1);
    }

    #[test]
    fn rejected_drawing_leaves_the_tank_alone() {
        let mut session = Session::with_classifier(560, 560, reject_all());
        let outcome = session.submit(&drawn_canvas()).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
        assert!(session.tank().is_empty());
    }

    #[test]
    fn blank_canvas_is_an_empty_result_even_when_accepted() {
        let mut session = Session::with_classifier(560, 560, accept_all());
        let outcome = session.submit(&blank_canvas()).unwrap();
        assert_eq!(outcome, SubmitOutcome::EmptyCanvas);
        assert!(session.tank().is_empty());
    }

    #[test]
    fn last_verdict_is_retained_between_submissions() {
        let mut session = Session::with_classifier(560, 560, reject_all());
        assert!(session.last_verdict().is_none());
        session.submit(&drawn_canvas()).unwrap();
        let verdict = session.last_verdict().unwrap();
        assert!(!verdict.is_fish);
        assert!((verdict.confidence - 0.1).abs() < 1e-6);
    }

    #[test]
    fn each_accepted_drawing_adds_one_fish() {
        let mut session = Session::with_classifier(560, 560, accept_all());
        for expected in 1..=3 {
            let outcome = session.submit(&drawn_canvas()).unwrap();
            assert_eq!(
                outcome,
                SubmitOutcome::Accepted {
                    confidence: 1.0,
                    fish_count: expected
                }
            );
        }
        assert_eq!(session.tank().snapshot().entities.len(), 3);
    }
}
