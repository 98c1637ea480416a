// The scan is not recursive; this file must never load.
