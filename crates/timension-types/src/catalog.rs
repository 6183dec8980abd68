use crate::figures::{HistoricalFigure, PivotEvent};

/// Mentors offered on the chat screen.
pub fn default_mentors() -> Vec<HistoricalFigure> {
    vec![
        HistoricalFigure::new("Leonardo da Vinci", "Renaissance Florence, late 15th century"),
        HistoricalFigure::new("Cleopatra VII", "Ptolemaic Egypt, 1st century BC"),
        HistoricalFigure::new("Ada Lovelace", "Victorian London, 1840s"),
        HistoricalFigure::new("Miyamoto Musashi", "Edo-period Japan, early 17th century"),
        HistoricalFigure::new("Albert Einstein", "Princeton, 1940s"),
    ]
}

/// Pivot points offered on the simulation screen.
pub fn default_pivots() -> Vec<PivotEvent> {
    vec![
        PivotEvent::new(
            "The burning of the Library of Alexandria",
            -48,
            "Centuries of accumulated scholarship were lost and never recovered.",
        ),
        PivotEvent::new(
            "Gutenberg completes the printing press",
            1440,
            "Movable type spread across Europe and made books cheap within two generations.",
        ),
        PivotEvent::new(
            "The fall of Constantinople",
            1453,
            "The Byzantine Empire ended and Greek scholars carried their manuscripts west.",
        ),
        PivotEvent::new(
            "Apollo 11 lands on the Moon",
            1969,
            "Two astronauts walked on the lunar surface and returned safely to Earth.",
        ),
    ]
}
