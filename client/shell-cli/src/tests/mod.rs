mod preferences_commands;
