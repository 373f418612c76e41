//! Table configuration options.

extern crate alloc;

use alloc::string::String;

/// Number of seats at a Tien Len table.
pub const SEATS: usize = 4;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tienlen::TableOptions;
///
/// let options = TableOptions::default()
///     .with_human_name("Alice")
///     .with_human_seat(0)
///     .with_deal_from_random_seat(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Display name of the human player.
    pub human_name: String,
    /// Display names of the computer players, in seat order.
    pub cpu_names: [String; SEATS - 1],
    /// Seat of the human player. Values past the last seat use the last seat.
    pub human_seat: usize,
    /// Whether dealing starts at a random seat instead of seat 0.
    pub deal_from_random_seat: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            human_name: "Me".into(),
            cpu_names: ["Player 1".into(), "Player 2".into(), "Player 3".into()],
            human_seat: SEATS - 1,
            deal_from_random_seat: true,
        }
    }
}

impl TableOptions {
    /// Sets the human player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::TableOptions;
    ///
    /// let options = TableOptions::default().with_human_name("Alice");
    /// assert_eq!(options.human_name, "Alice");
    /// ```
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Sets the computer players' names.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::TableOptions;
    ///
    /// let options = TableOptions::default().with_cpu_names(["Bao", "Linh", "Tuan"]);
    /// assert_eq!(options.cpu_names[1], "Linh");
    /// ```
    #[must_use]
    pub fn with_cpu_names(mut self, names: [&str; SEATS - 1]) -> Self {
        self.cpu_names = names.map(String::from);
        self
    }

    /// Sets the human player's seat.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::TableOptions;
    ///
    /// let options = TableOptions::default().with_human_seat(0);
    /// assert_eq!(options.human_seat, 0);
    /// ```
    #[must_use]
    pub const fn with_human_seat(mut self, seat: usize) -> Self {
        self.human_seat = seat;
        self
    }

    /// Sets whether dealing starts at a random seat.
    ///
    /// # Example
    ///
    /// ```
    /// use tienlen::TableOptions;
    ///
    /// let options = TableOptions::default().with_deal_from_random_seat(false);
    /// assert_eq!(options.deal_from_random_seat, false);
    /// ```
    #[must_use]
    pub const fn with_deal_from_random_seat(mut self, random: bool) -> Self {
        self.deal_from_random_seat = random;
        self
    }

    pub(crate) const fn human_seat_clamped(&self) -> usize {
        if self.human_seat < SEATS {
            self.human_seat
        } else {
            SEATS - 1
        }
    }
}
