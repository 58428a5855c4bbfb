mod kind;
mod rewound;
mod runtime;
mod title;
mod year;

pub use self::{kind::*, rewound::*, runtime::*, title::*, year::*};
use crate::entity::Pence;
use crate::KernelError;
use destructure::Destructure;
use time::Date;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Video {
    title: VideoTitle,
    year: ReleaseYear,
    runtime: Runtime,
    kind: VideoKind,
    rewound: IsRewound,
}

impl Video {
    /// Creates a rewound tape. `today` bounds the release year.
    pub fn new(
        title: impl Into<String>,
        year: impl Into<i32>,
        runtime: impl Into<i32>,
        today: Date,
    ) -> error_stack::Result<Self, KernelError> {
        Self::with_kind(VideoKind::Standard, title, year, runtime, today)
    }

    pub fn dvd(
        title: impl Into<String>,
        year: impl Into<i32>,
        runtime: impl Into<i32>,
        today: Date,
    ) -> error_stack::Result<Self, KernelError> {
        Self::with_kind(VideoKind::Dvd, title, year, runtime, today)
    }

    pub fn with_kind(
        kind: VideoKind,
        title: impl Into<String>,
        year: impl Into<i32>,
        runtime: impl Into<i32>,
        today: Date,
    ) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let year = year.into();
        let runtime = runtime.into();

        if title.trim().is_empty() {
            return Err(KernelError::ValueValidation.with_reason("Please enter a valid title"));
        }
        if year < EARLIEST_RELEASE_YEAR {
            return Err(KernelError::ValueValidation
                .with_reason("Videos can't be released before 1900"));
        }
        if year > today.year() {
            return Err(
                KernelError::ValueValidation.with_reason("Year shouldn't be in the future")
            );
        }
        if runtime < 0 {
            return Err(KernelError::ValueValidation.with_reason("Runtime cannot be negative"));
        }
        if runtime > MAX_RUNTIME {
            return Err(KernelError::ValueValidation.with_reason("Runtime is too long"));
        }
        if runtime < MIN_RUNTIME {
            return Err(KernelError::ValueValidation.with_reason("Runtime is too short"));
        }

        Ok(Self {
            title: VideoTitle::new(title),
            year: ReleaseYear::new(year),
            runtime: Runtime::new(runtime),
            kind,
            rewound: IsRewound::default(),
        })
    }

    pub fn is_rewound(&self) -> bool {
        *self.rewound.as_ref()
    }

    /// `The Matrix (1999)`
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.title, self.year.as_ref())
    }

    pub fn rental_price(&self, today: Date) -> Pence {
        self.kind.rental_price(&self.year, &self.runtime, today)
    }

    pub fn display_price(&self, today: Date) -> String {
        self.rental_price(today).to_string()
    }

    pub fn watch(&mut self) -> error_stack::Result<(), KernelError> {
        if !self.kind.needs_rewind() {
            return Ok(());
        }
        if !self.is_rewound() {
            return Err(KernelError::ValueValidation.with_reason("Video needs to be rewound first"));
        }
        self.rewound = IsRewound::new(false);
        Ok(())
    }

    pub fn rewind(&mut self) -> error_stack::Result<(), KernelError> {
        if self.is_rewound() {
            return Err(KernelError::ValueValidation.with_reason("Video is already rewound"));
        }
        self.rewound = IsRewound::new(true);
        Ok(())
    }
}
