use anchor_lang::prelude::*;

/// Error types for the subflow program
#[error_code]
pub enum SubflowError {
    // --- Input validation errors

    #[msg("Max character length for service name exceeded")]
    MaxServiceNameExceeded,

    #[msg("Max URI length exceeded")]
    MaxURILengthExceeded,

    // --- Pause lifecycle errors

    #[msg("You can't pause for more than the stipulated max pause time")]
    ExceededMaxPauseTime,

    #[msg("Can't perform action, service is paused")]
    ServicePaused,

    #[msg("Can't unpause service till the pause period elapses")]
    CantUnpauseYet,

    // --- Payment errors

    #[msg("Token account has the wrong mint")]
    WrongMint,

    #[msg("This user is not subscribed")]
    UserNeverSubscribed,

    // --- Arithmetic

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
