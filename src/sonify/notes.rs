/*
Note Numbers
============

Pitches are MIDI note numbers; middle C (C4) is 60 and A4 = 69 = 440 Hz.

    note_number = 12 * (octave + 1) + semitone
    semitone: C=0, D=2, E=4, F=5, G=7, A=9, B=11

Only the notes the sonification tables use are named here. Every table is a
major triad plus the octave (C, E, G, C'), so each floor is a consonant step
above the one below it.
*/

pub const C2: u8 = 36;
pub const E2: u8 = 40;
pub const G2: u8 = 43;
pub const C3: u8 = 48;
pub const E3: u8 = 52;
pub const G3: u8 = 55;
pub const C4: u8 = 60;
pub const A4: u8 = 69;

/// Convert MIDI note number to frequency in Hz.
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - A4 as f32) / 12.0)
}
