//! Text output for the game.
//!
//! Every function writes complete lines to the given writer and never reads
//! or changes game state beyond what it is handed. The labels are the game's
//! Portuguese text and are kept byte-for-byte stable so whole-game output
//! can be compared in tests.

use std::io::{self, Write};

use crate::board::TerritoryMap;
use crate::combat::{CombatOutcome, CombatReport};
use crate::core::{Player, PlayerMap};
use crate::missions::Mission;
use crate::rules::GameResult;

/// Full map listing between rule lines.
pub fn render_map(out: &mut impl Write, map: &TerritoryMap) -> io::Result<()> {
    writeln!(out, "----- MAPA -----")?;
    for (id, t) in map.iter() {
        writeln!(
            out,
            "{:>2}: {} | Cor: {:<6} | Tropas: {}",
            id.index(),
            t.name(),
            t.owner,
            t.troops
        )?;
    }
    writeln!(out, "----------------")
}

/// A player's mission, shown once at game start.
pub fn render_mission(out: &mut impl Write, player: &Player, mission: Option<&Mission>) -> io::Result<()> {
    write!(out, "Jogador {} ({}) - ", player.id.number(), player.color)?;
    match mission {
        Some(mission) => writeln!(out, "Sua missão: {}", mission.text()),
        None => writeln!(out),
    }
}

pub fn render_round_header(out: &mut impl Write, round: u32) -> io::Result<()> {
    writeln!(out, "\n===== RODADA {} =====", round)
}

/// Roll line, then result line.
pub fn render_combat(out: &mut impl Write, report: &CombatReport) -> io::Result<()> {
    writeln!(
        out,
        "Ataque: {} ({}, {} tropas) -> {} ({}, {} tropas) | rolagem A={} D={}",
        report.attacker_name,
        report.attacker_owner,
        report.attacker_troops,
        report.defender_name,
        report.defender_owner,
        report.defender_troops,
        report.rolls.attacker,
        report.rolls.defender
    )?;

    match report.outcome {
        CombatOutcome::Conquered { transferred } => writeln!(
            out,
            "Vencedor: atacante. {} tropas transferidas. Territorio {} agora pertence a {}.",
            transferred, report.defender_name, report.attacker_owner
        ),
        CombatOutcome::Repelled { attacker_remaining } => writeln!(
            out,
            "Defensor resiste. Atacante perde 1 tropa. Tropas restantes: {}",
            attacker_remaining
        ),
    }
}

pub fn render_no_attacker(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(
        out,
        "Jogador {} ({}) nao tem territorios aptos para atacar.",
        player.id.number(),
        player.color
    )
}

pub fn render_no_target(out: &mut impl Write, player: &Player) -> io::Result<()> {
    writeln!(out, "Jogador {} ({}) nao encontrou alvo.", player.id.number(), player.color)
}

pub fn render_mission_complete(out: &mut impl Write, player: &Player, mission: &Mission) -> io::Result<()> {
    writeln!(
        out,
        "\n>>> Jogador {} ({}) cumpriu a missão: {}",
        player.id.number(),
        player.color,
        mission.text()
    )
}

/// Closing summary line. `players` resolves the winner's color.
pub fn render_result(
    out: &mut impl Write,
    result: &GameResult,
    players: &PlayerMap<Player>,
) -> io::Result<()> {
    match result {
        GameResult::Winner(id) => writeln!(
            out,
            "\nJogador {} ({}) venceu por cumprir a missao!",
            id.number(),
            players[*id].color
        ),
        GameResult::NoWinner { rounds } => {
            writeln!(out, "\nNenhum jogador cumpriu a missão em {} rodadas.", rounds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;
    use crate::combat::Rolls;
    use crate::core::PlayerId;

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn blue() -> Player {
        Player::new(PlayerId::new(0), "Blue")
    }

    #[test]
    fn test_render_map() {
        let map = TerritoryMap::from_territories(&[
            Territory::new("T1", "Blue", 3),
            Territory::new("T2", "Red", 14),
        ])
        .unwrap();

        let out = text(|w| render_map(w, &map));
        assert_eq!(
            out,
            "----- MAPA -----\n \
             0: T1 | Cor: Blue   | Tropas: 3\n \
             1: T2 | Cor: Red    | Tropas: 14\n\
             ----------------\n"
        );
    }

    #[test]
    fn test_render_mission() {
        let mission = Mission::new("Possuir 3 territorios");
        assert_eq!(
            text(|w| render_mission(w, &blue(), Some(&mission))),
            "Jogador 1 (Blue) - Sua missão: Possuir 3 territorios\n"
        );
        assert_eq!(text(|w| render_mission(w, &blue(), None)), "Jogador 1 (Blue) - \n");
    }

    #[test]
    fn test_render_combat_conquest() {
        let report = CombatReport {
            attacker_name: "T1".into(),
            attacker_owner: "Blue".into(),
            attacker_troops: 4,
            defender_name: "T2".into(),
            defender_owner: "Red".into(),
            defender_troops: 2,
            rolls: Rolls { attacker: 6, defender: 1 },
            outcome: CombatOutcome::Conquered { transferred: 2 },
        };

        assert_eq!(
            text(|w| render_combat(w, &report)),
            "Ataque: T1 (Blue, 4 tropas) -> T2 (Red, 2 tropas) | rolagem A=6 D=1\n\
             Vencedor: atacante. 2 tropas transferidas. Territorio T2 agora pertence a Blue.\n"
        );
    }

    #[test]
    fn test_render_combat_repelled() {
        let report = CombatReport {
            attacker_name: "T4".into(),
            attacker_owner: "Red".into(),
            attacker_troops: 5,
            defender_name: "T3".into(),
            defender_owner: "Blue".into(),
            defender_troops: 2,
            rolls: Rolls { attacker: 3, defender: 3 },
            outcome: CombatOutcome::Repelled { attacker_remaining: 4 },
        };

        assert_eq!(
            text(|w| render_combat(w, &report)),
            "Ataque: T4 (Red, 5 tropas) -> T3 (Blue, 2 tropas) | rolagem A=3 D=3\n\
             Defensor resiste. Atacante perde 1 tropa. Tropas restantes: 4\n"
        );
    }

    #[test]
    fn test_render_skips_and_headers() {
        assert_eq!(text(|w| render_round_header(w, 7)), "\n===== RODADA 7 =====\n");
        assert_eq!(
            text(|w| render_no_attacker(w, &blue())),
            "Jogador 1 (Blue) nao tem territorios aptos para atacar.\n"
        );
        assert_eq!(text(|w| render_no_target(w, &blue())), "Jogador 1 (Blue) nao encontrou alvo.\n");
    }

    #[test]
    fn test_render_results() {
        let players = PlayerMap::from_vec(vec![blue(), Player::new(PlayerId::new(1), "Red")]);
        let mission = Mission::new("Possuir 5 territorios");

        assert_eq!(
            text(|w| render_mission_complete(w, &players[PlayerId::new(1)], &mission)),
            "\n>>> Jogador 2 (Red) cumpriu a missão: Possuir 5 territorios\n"
        );
        assert_eq!(
            text(|w| render_result(w, &GameResult::Winner(PlayerId::new(1)), &players)),
            "\nJogador 2 (Red) venceu por cumprir a missao!\n"
        );
        assert_eq!(
            text(|w| render_result(w, &GameResult::NoWinner { rounds: 50 }, &players)),
            "\nNenhum jogador cumpriu a missão em 50 rodadas.\n"
        );
    }
}
