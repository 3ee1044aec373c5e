mod credential_source;
