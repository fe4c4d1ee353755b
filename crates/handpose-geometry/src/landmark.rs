/// A tracked landmark exposing three coordinates.
///
/// This is the only assumption made about the hand tracking model: it yields
/// an ordered sequence of objects with `x`, `y` and `z` fields.
pub trait Landmark {
    /// x coordinate
    fn x(&self) -> f64;
    /// y coordinate
    fn y(&self) -> f64;
    /// z coordinate
    fn z(&self) -> f64;
}

impl Landmark for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
}

impl Landmark for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
}

impl<T: Landmark + ?Sized> Landmark for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }
    fn y(&self) -> f64 {
        (**self).y()
    }
    fn z(&self) -> f64 {
        (**self).z()
    }
}

/// Number of landmarks reported for a single hand.
pub const NUM_HAND_LANDMARKS: usize = 21;

/// The landmarks of a tracked hand, in the order the tracking model reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    /// Wrist
    Wrist = 0,
    /// Thumb carpometacarpal joint
    ThumbCmc = 1,
    /// Thumb metacarpophalangeal joint
    ThumbMcp = 2,
    /// Thumb interphalangeal joint
    ThumbIp = 3,
    /// Thumb tip
    ThumbTip = 4,
    /// Index finger metacarpophalangeal joint
    IndexFingerMcp = 5,
    /// Index finger proximal interphalangeal joint
    IndexFingerPip = 6,
    /// Index finger distal interphalangeal joint
    IndexFingerDip = 7,
    /// Index finger tip
    IndexFingerTip = 8,
    /// Middle finger metacarpophalangeal joint
    MiddleFingerMcp = 9,
    /// Middle finger proximal interphalangeal joint
    MiddleFingerPip = 10,
    /// Middle finger distal interphalangeal joint
    MiddleFingerDip = 11,
    /// Middle finger tip
    MiddleFingerTip = 12,
    /// Ring finger metacarpophalangeal joint
    RingFingerMcp = 13,
    /// Ring finger proximal interphalangeal joint
    RingFingerPip = 14,
    /// Ring finger distal interphalangeal joint
    RingFingerDip = 15,
    /// Ring finger tip
    RingFingerTip = 16,
    /// Pinky metacarpophalangeal joint
    PinkyMcp = 17,
    /// Pinky proximal interphalangeal joint
    PinkyPip = 18,
    /// Pinky distal interphalangeal joint
    PinkyDip = 19,
    /// Pinky tip
    PinkyTip = 20,
}

impl HandLandmark {
    /// All hand landmarks in index order.
    pub const ALL: [HandLandmark; NUM_HAND_LANDMARKS] = [
        HandLandmark::Wrist,
        HandLandmark::ThumbCmc,
        HandLandmark::ThumbMcp,
        HandLandmark::ThumbIp,
        HandLandmark::ThumbTip,
        HandLandmark::IndexFingerMcp,
        HandLandmark::IndexFingerPip,
        HandLandmark::IndexFingerDip,
        HandLandmark::IndexFingerTip,
        HandLandmark::MiddleFingerMcp,
        HandLandmark::MiddleFingerPip,
        HandLandmark::MiddleFingerDip,
        HandLandmark::MiddleFingerTip,
        HandLandmark::RingFingerMcp,
        HandLandmark::RingFingerPip,
        HandLandmark::RingFingerDip,
        HandLandmark::RingFingerTip,
        HandLandmark::PinkyMcp,
        HandLandmark::PinkyPip,
        HandLandmark::PinkyDip,
        HandLandmark::PinkyTip,
    ];

    /// Position of the landmark in the point cloud.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the landmark at the given index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The landmark name as reported by the tracking model, e.g. `INDEX_FINGER_TIP`.
    pub fn name(self) -> &'static str {
        match self {
            HandLandmark::Wrist => "WRIST",
            HandLandmark::ThumbCmc => "THUMB_CMC",
            HandLandmark::ThumbMcp => "THUMB_MCP",
            HandLandmark::ThumbIp => "THUMB_IP",
            HandLandmark::ThumbTip => "THUMB_TIP",
            HandLandmark::IndexFingerMcp => "INDEX_FINGER_MCP",
            HandLandmark::IndexFingerPip => "INDEX_FINGER_PIP",
            HandLandmark::IndexFingerDip => "INDEX_FINGER_DIP",
            HandLandmark::IndexFingerTip => "INDEX_FINGER_TIP",
            HandLandmark::MiddleFingerMcp => "MIDDLE_FINGER_MCP",
            HandLandmark::MiddleFingerPip => "MIDDLE_FINGER_PIP",
            HandLandmark::MiddleFingerDip => "MIDDLE_FINGER_DIP",
            HandLandmark::MiddleFingerTip => "MIDDLE_FINGER_TIP",
            HandLandmark::RingFingerMcp => "RING_FINGER_MCP",
            HandLandmark::RingFingerPip => "RING_FINGER_PIP",
            HandLandmark::RingFingerDip => "RING_FINGER_DIP",
            HandLandmark::RingFingerTip => "RING_FINGER_TIP",
            HandLandmark::PinkyMcp => "PINKY_MCP",
            HandLandmark::PinkyPip => "PINKY_PIP",
            HandLandmark::PinkyDip => "PINKY_DIP",
            HandLandmark::PinkyTip => "PINKY_TIP",
        }
    }
}

impl std::fmt::Display for HandLandmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_landmark_index() {
        for (i, lm) in HandLandmark::ALL.iter().enumerate() {
            assert_eq!(lm.index(), i);
            assert_eq!(HandLandmark::from_index(i), Some(*lm));
        }
        assert_eq!(HandLandmark::from_index(NUM_HAND_LANDMARKS), None);
        assert_eq!(HandLandmark::PinkyTip.to_string(), "PINKY_TIP");
    }

    #[test]
    fn test_landmark_impls() {
        let a: [f64; 3] = [1.0, 2.0, 3.0];
        let b: (f64, f64, f64) = (1.0, 2.0, 3.0);
        assert_eq!((a.x(), a.y(), a.z()), b);

        fn coords<L: Landmark>(lm: L) -> [f64; 3] {
            [lm.x(), lm.y(), lm.z()]
        }
        assert_eq!(coords(&b), a);
        assert_eq!(coords(&&a), a);
    }
}
