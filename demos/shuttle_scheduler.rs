//! Shuttle dispatch demo
//!
//! Groups campus halls into shuttle stops, queues the stops by total
//! passenger load and sends shuttles to the busiest stop first.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example shuttle_scheduler
//!
//! # Show the forest's merge steps
//! RUST_LOG=binomial_forest=trace cargo run --example shuttle_scheduler
//! ```

use binomial_forest::{BinomialForest, PriorityQueue};
use std::cmp::Ordering;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// A hall and the number of passengers waiting there
#[derive(Debug, Clone)]
struct Hall {
    name: &'static str,
    load: u32,
}

/// A shuttle stop serving one or more halls
#[derive(Debug, Clone)]
struct ShuttleStop {
    number: u32,
    halls: Vec<Hall>,
    total_load: u32,
}

impl ShuttleStop {
    fn new(number: u32) -> Self {
        Self {
            number,
            halls: Vec::new(),
            total_load: 0,
        }
    }

    fn with_hall(mut self, hall: &Hall) -> Self {
        self.total_load += hall.load;
        self.halls.push(hall.clone());
        self
    }
}

// Stops are ordered by total load only
impl PartialEq for ShuttleStop {
    fn eq(&self, other: &Self) -> bool {
        self.total_load == other.total_load
    }
}

impl Eq for ShuttleStop {}

impl PartialOrd for ShuttleStop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShuttleStop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_load.cmp(&other.total_load)
    }
}

impl fmt::Display for ShuttleStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.halls.iter().map(|hall| hall.name).collect();
        write!(
            f,
            "Shuttle Stop {} (Total {} passengers) serving halls: {}",
            self.number,
            self.total_load,
            names.join(", ")
        )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lilac = Hall { name: "Lilac Hall", load: 10 };
    let bayramian = Hall { name: "Bayramian Hall", load: 20 };
    let eucalyptus = Hall { name: "Eucalyptus Hall", load: 20 };
    let sierra = Hall { name: "Sierra Hall", load: 50 };
    let nordoff = Hall { name: "Nordoff Hall", load: 30 };
    let chaparral = Hall { name: "Chaparral Hall", load: 10 };
    let live_oak = Hall { name: "Live Oak Hall", load: 10 };
    let magnolia = Hall { name: "Magnolia Hall", load: 40 };
    let jacaranda = Hall { name: "Jacaranda Halls", load: 30 };

    let stops = vec![
        ShuttleStop::new(1).with_hall(&jacaranda),
        ShuttleStop::new(2).with_hall(&magnolia),
        ShuttleStop::new(3).with_hall(&chaparral).with_hall(&live_oak),
        ShuttleStop::new(4).with_hall(&nordoff),
        ShuttleStop::new(5).with_hall(&sierra),
        ShuttleStop::new(6).with_hall(&bayramian),
        ShuttleStop::new(7).with_hall(&bayramian).with_hall(&eucalyptus),
        ShuttleStop::new(8).with_hall(&lilac),
    ];

    // North and south campus queues are built separately, then combined
    let (north, south) = stops.split_at(4);
    let mut queue: BinomialForest<ShuttleStop> = north.iter().cloned().collect();
    let mut south_queue: BinomialForest<ShuttleStop> = south.iter().cloned().collect();
    queue.merge(&mut south_queue);

    while let Ok(stop) = queue.delete_max() {
        println!("Sending shuttle to: {stop}");
    }
}
