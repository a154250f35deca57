//! The game engine: placement, movement, combat, phase and turn.

use im::OrdSet;
use tracing::{debug, info, trace};

use crate::board::{are_adjacent_orthogonal, neighbors, Board, BoardSnapshot};
use crate::core::{
    Action, Cell, Combat, GameConfig, GameRng, Outcome, Phase, PieceId, Player, PlayerMap,
    PublicState, Rank, RejectCode,
};
use crate::rules::{combat, GameResult, RulesEngine};

/// One game between two players.
///
/// Every command either applies completely and reports what happened, or
/// is rejected with a `RejectCode` and leaves board, pools, phase and turn
/// exactly as they were.
///
/// Cloning is cheap: board and pools are persistent collections.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    /// Ranks not yet deployed, per owner.
    pools: PlayerMap<OrdSet<Rank>>,
    /// Ranks removed by combat, per owner.
    captured: PlayerMap<OrdSet<Rank>>,
    public: PublicState,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Fresh game with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Fresh game with the given rules.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(),
            pools: PlayerMap::new(|_| Rank::all().collect()),
            captured: PlayerMap::with_default(),
            public: PublicState::new(),
        }
    }

    /// Discard everything and start a fresh game with the same rules.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        debug!("game reset");
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.public.phase
    }

    /// Player whose command is expected next.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.public.current_player
    }

    /// Winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.public.winner
    }

    /// Phase, turn and winner together.
    #[must_use]
    pub fn public_state(&self) -> &PublicState {
        &self.public
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupancy for rendering.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Ranks `player` has not deployed yet, weakest first.
    pub fn pool(&self, player: Player) -> impl Iterator<Item = Rank> + '_ {
        self.pools[player].iter().copied()
    }

    /// Ranks of `player` lost in combat.
    pub fn captured(&self, player: Player) -> impl Iterator<Item = Rank> + '_ {
        self.captured[player].iter().copied()
    }

    /// Where a piece stands, if it is on the board.
    #[must_use]
    pub fn location_of(&self, piece: PieceId) -> Option<Cell> {
        self.board.location_of(piece)
    }

    /// Whether a piece is still waiting to be deployed.
    #[must_use]
    pub fn is_unplaced(&self, piece: PieceId) -> bool {
        self.pools[piece.owner].contains(&piece.rank)
    }

    /// Whether a piece has been removed by combat.
    #[must_use]
    pub fn is_captured(&self, piece: PieceId) -> bool {
        self.captured[piece.owner].contains(&piece.rank)
    }

    /// Whether both pools are empty.
    #[must_use]
    pub fn is_fully_deployed(&self) -> bool {
        self.pools.iter().all(|(_, pool)| pool.is_empty())
    }

    // === Commands ===

    /// Deploy `piece` onto `cell` during setup.
    pub fn place_piece(&mut self, piece: PieceId, cell: Cell) -> Outcome {
        if let Err(reason) = self.check_placement(piece, cell) {
            return self.reject("place", piece.owner, reason);
        }
        if let Err(error) = self.board.place(piece, cell) {
            return self.reject("place", piece.owner, error.into());
        }

        self.pools[piece.owner].remove(&piece.rank);
        self.public.advance_turn();
        debug!(player = %piece.owner, rank = %piece.rank, %cell, "piece placed");
        Outcome::accepted()
    }

    /// End setup and begin play.
    ///
    /// Partial deployments may start unless the configuration requires
    /// every piece on the board.
    pub fn start_game(&mut self) -> Outcome {
        let player = self.public.current_player;
        if self.public.phase != Phase::Setup {
            return self.reject("start", player, RejectCode::InvalidPhase);
        }
        if self.config.require_full_deployment && !self.is_fully_deployed() {
            return self.reject("start", player, RejectCode::IncompleteDeployment);
        }

        self.public.phase = Phase::Playing;
        debug!(first = %player, pieces = self.board.len(), "play started");
        Outcome::accepted()
    }

    /// Step `piece` onto `to` during play, fighting any opposing occupant.
    ///
    /// Checked in order: phase, turn, target occupant (friendly fire, then
    /// combat), then geometry. A capture must also be a legal single step.
    pub fn move_piece(&mut self, piece: PieceId, to: Cell) -> Outcome {
        if self.public.phase != Phase::Playing {
            return self.reject("move", piece.owner, RejectCode::InvalidPhase);
        }
        if !self.public.is_turn_of(piece.owner) {
            return self.reject("move", piece.owner, RejectCode::WrongTurn);
        }

        let fight = match self.board.cell_at(to) {
            Some(occupant) if occupant.owner == piece.owner => {
                return self.reject("move", piece.owner, RejectCode::FriendlyFire);
            }
            Some(defender) => Some(combat::resolve(piece, defender, &self.config)),
            None => None,
        };

        if let Some(fight) = fight.filter(|fight| !fight.attacker_won) {
            trace!(attacker = %fight.attacker, defender = %fight.defender, "attack repelled");
            return self
                .reject("move", piece.owner, RejectCode::CombatLost)
                .with_combat(fight);
        }

        let Some(from) = self
            .board
            .location_of(piece)
            .filter(|&from| are_adjacent_orthogonal(from, to))
        else {
            return self.reject("move", piece.owner, RejectCode::IllegalGeometry);
        };

        let mut outcome = Outcome::accepted();
        if let Some(fight) = fight {
            self.capture(fight, to);
            outcome = outcome.with_combat(fight);
        }
        self.board.move_occupant(from, to);
        debug!(player = %piece.owner, rank = %piece.rank, %from, %to, "piece moved");

        if fight.is_some_and(|fight| fight.defender.rank.is_flag()) {
            self.public.finish(piece.owner);
            info!(winner = %piece.owner, "flag captured");
            outcome = outcome.with_winner(piece.owner);
        }
        self.public.advance_turn();

        outcome
    }

    /// Complete setup with random placements.
    ///
    /// Alternates between the players exactly as manual placement would,
    /// putting a random remaining piece of the player on turn into a random
    /// free home cell. Stops when the player on turn has nothing left to
    /// place. Returns how many pieces were placed.
    pub fn deploy_randomly(&mut self, rng: &mut GameRng) -> usize {
        let mut placed = 0;

        while self.public.phase == Phase::Setup {
            let player = self.public.current_player;
            let ranks: Vec<Rank> = self.pool(player).collect();
            let free: Vec<Cell> = Cell::home_area(player)
                .filter(|&cell| self.board.cell_at(cell).is_none())
                .collect();

            let (Some(&rank), Some(&cell)) = (rng.choose(&ranks), rng.choose(&free)) else {
                break;
            };
            if !self.place_piece(PieceId::new(player, rank), cell).is_accepted() {
                break;
            }
            placed += 1;
        }

        debug!(placed, seed = rng.seed(), "random deployment");
        placed
    }

    // === Internals ===

    fn check_placement(&self, piece: PieceId, cell: Cell) -> Result<(), RejectCode> {
        if self.public.phase != Phase::Setup {
            return Err(RejectCode::InvalidPhase);
        }
        if !self.public.is_turn_of(piece.owner) {
            return Err(RejectCode::WrongTurn);
        }
        if !self.is_unplaced(piece) {
            return Err(RejectCode::AlreadyPlaced);
        }
        if !cell.is_home_of(piece.owner) {
            return Err(RejectCode::OutOfHomeArea);
        }
        if self.board.cell_at(cell).is_some() {
            return Err(RejectCode::OccupiedCell);
        }
        Ok(())
    }

    fn capture(&mut self, fight: Combat, at: Cell) {
        if let Some(defender) = self.board.remove(at) {
            self.captured[defender.owner].insert(defender.rank);
        }
        trace!(attacker = %fight.attacker, defender = %fight.defender, "defender captured");
    }

    fn reject(&self, command: &str, player: Player, reason: RejectCode) -> Outcome {
        trace!(command, %player, ?reason, phase = %self.public.phase, "command rejected");
        Outcome::rejected(reason)
    }

    fn legal_placements(&self, player: Player) -> Vec<Action> {
        let free: Vec<Cell> = Cell::home_area(player)
            .filter(|&cell| self.board.cell_at(cell).is_none())
            .collect();

        self.pool(player)
            .flat_map(|rank| {
                let piece = PieceId::new(player, rank);
                free.iter().map(move |&cell| Action::Place { piece, cell })
            })
            .collect()
    }

    fn legal_moves(&self, player: Player) -> Vec<Action> {
        let mut actions = Vec::new();

        for (from, piece) in self.board.occupied().filter(|(_, p)| p.owner == player) {
            for to in neighbors(from) {
                let allowed = match self.board.cell_at(to) {
                    None => true,
                    Some(occupant) if occupant.owner == player => false,
                    Some(defender) => combat::attacker_wins(piece.rank, defender.rank, &self.config),
                };
                if allowed {
                    actions.push(Action::Move { piece, to });
                }
            }
        }

        actions
    }
}

impl RulesEngine for GameEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, player: Player) -> Vec<Action> {
        match self.public.phase {
            Phase::Setup => {
                let mut actions = if self.public.is_turn_of(player) {
                    self.legal_placements(player)
                } else {
                    Vec::new()
                };
                if !self.config.require_full_deployment || self.is_fully_deployed() {
                    actions.push(Action::Start);
                }
                actions
            }
            Phase::Playing if self.public.is_turn_of(player) => self.legal_moves(player),
            Phase::Playing | Phase::Finished => Vec::new(),
        }
    }

    fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Place { piece, cell } => self.place_piece(piece, cell),
            Action::Move { piece, to } => self.move_piece(piece, to),
            Action::Start => self.start_game(),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.public.winner.map(|winner| GameResult { winner })
    }
}
