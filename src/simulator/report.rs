//! Scenario report rendering.

/// Result of one scenario run.
#[derive(Debug, Clone)]
pub struct SimReport {
    /// Unique name of the item the scenario bought.
    pub item: String,
    /// How many shop items registration produced.
    pub items_registered: usize,
    pub max_health: u32,
    /// Tick index the scripted hit landed at.
    pub damage_tick: u64,
    /// Health before the first tick, then after every tick, so
    /// `timeline[t + 1]` is the health once tick `t` has run.
    pub timeline: Vec<u32>,
}

impl SimReport {
    /// Ticks from the hit (inclusive) until the player is back at max
    /// health, or `None` if the run ended before that.
    pub fn ticks_to_full(&self) -> Option<u64> {
        for tick in self.damage_tick..self.timeline.len().saturating_sub(1) as u64 {
            if self.timeline[tick as usize + 1] >= self.max_health {
                return Some(tick + 1 - self.damage_tick);
            }
        }
        None
    }

    /// Text rendering: the health timeline (changed ticks only) plus a
    /// one-line summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Item: {} ({} shop items registered)\n",
            self.item, self.items_registered
        ));
        out.push_str(&format!(
            "Hit at tick {}, max health {}\n\n",
            self.damage_tick, self.max_health
        ));
        out.push_str("tick  health\n");

        let mut last = None;
        for (index, health) in self.timeline.iter().enumerate() {
            if last != Some(*health) {
                if index == 0 {
                    out.push_str(&format!("   -  {health}\n"));
                } else {
                    out.push_str(&format!("{:4}  {health}\n", index - 1));
                }
                last = Some(*health);
            }
        }

        out.push('\n');
        match self.ticks_to_full() {
            Some(ticks) => {
                out.push_str(&format!("Healed back to full {ticks} ticks after the hit.\n"))
            }
            None => out.push_str("Run ended before the player was back at full health.\n"),
        }
        out
    }
}
