// Fixture for a group that lists a member twice and one it cannot resolve;
// the test provides the group implementation.
